//! Sample catalog content and the destructive reset that loads it.

use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::entities::project::Tags;
use crate::entities::{project, resource};

struct SampleProject {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
}

struct SampleResource {
    title: &'static str,
    description: &'static str,
    kind: &'static str,
    category: &'static str,
    date: &'static str,
    author: &'static str,
}

const PROJECTS: &[SampleProject] = &[
    SampleProject {
        title: "Smart Learning Platform",
        description: "An AI-driven adaptive learning platform that tunes course content and difficulty to each student's ability and progress.",
        icon: "🚀",
        color: "#4CAF50",
        category: "Application",
        tags: &["Vue.js", "Python", "TensorFlow"],
    },
    SampleProject {
        title: "Data Visualization Platform",
        description: "A powerful data visualization platform that helps teams find the value in their data and make informed decisions.",
        icon: "📊",
        color: "#8BC34A",
        category: "Website",
        tags: &["D3.js", "Vue.js", "Dashboard"],
    },
    SampleProject {
        title: "Developer Toolkit",
        description: "A set of efficient tools for developers covering code generation, formatting and testing.",
        icon: "🛠️",
        color: "#388E3C",
        category: "Tool",
        tags: &["JavaScript", "Developer Tools", "Productivity"],
    },
    SampleProject {
        title: "Open Source Component Library",
        description: "A polished UI component library with over a hundred reusable components for building applications quickly.",
        icon: "🧩",
        color: "#66BB6A",
        category: "Open Source",
        tags: &["Vue.js", "SCSS", "TypeScript"],
    },
    SampleProject {
        title: "E-commerce Management System",
        description: "A one-stop e-commerce management solution covering orders, inventory and customer relationships.",
        icon: "🛒",
        color: "#43A047",
        category: "Website",
        tags: &["E-commerce", "Management", "Dashboard"],
    },
    SampleProject {
        title: "Content Management System",
        description: "A modern content management system supporting many content formats with strong editing and publishing features.",
        icon: "📝",
        color: "#2E7D32",
        category: "Tool",
        tags: &["CMS", "Content", "Management"],
    },
];

const RESOURCES: &[SampleResource] = &[
    // Tutorials
    SampleResource {
        title: "Advanced Vue.js Component Design Patterns",
        description: "A deep dive into Vue component design patterns, including composition, inheritance, slots and dependency injection.",
        kind: "Frontend",
        category: "Tutorial",
        date: "2023-06-15",
        author: "Zhang Ming",
    },
    SampleResource {
        title: "Building a High-Performance Microservice Architecture",
        description: "Build a scalable, high-performance microservice system from scratch, including service discovery, load balancing and fault recovery.",
        kind: "Backend",
        category: "Tutorial",
        date: "2023-05-28",
        author: "Li Hua",
    },
    SampleResource {
        title: "Smooth Web Animations with GSAP",
        description: "Learn how to use the GSAP animation library to create complex interactive animations that improve the user experience.",
        kind: "Frontend",
        category: "Tutorial",
        date: "2023-04-10",
        author: "Chen Qiang",
    },
    // Tools
    SampleResource {
        title: "Essential Frontend Developer Toolkit",
        description: "A curated set of frontend tools and extensions to improve development speed and code quality.",
        kind: "Toolkit",
        category: "Tool",
        date: "2023-06-02",
        author: "Chen Qiang",
    },
    SampleResource {
        title: "Backend Automation Tools",
        description: "Automation tools that make backend development faster, including CI/CD, testing and deployment tools.",
        kind: "Toolkit",
        category: "Tool",
        date: "2023-05-15",
        author: "Lin Xiaoyu",
    },
    SampleResource {
        title: "UI Designer Toolbox",
        description: "A collection of excellent design tools and assets that help designers create great user interfaces.",
        kind: "Design Tool",
        category: "Tool",
        date: "2023-04-22",
        author: "Wang Fang",
    },
    // Learning resources
    SampleResource {
        title: "Frontend Learning Roadmap",
        description: "A complete roadmap from beginner to senior engineer, with the skills and material needed at each stage.",
        kind: "Learning",
        category: "Resource",
        date: "2023-06-20",
        author: "Xcamp Team",
    },
    SampleResource {
        title: "Curated Open Source Projects",
        description: "Hand-picked open source projects for learning and practice across frontend, backend and mobile development.",
        kind: "Open Source",
        category: "Resource",
        date: "2023-05-10",
        author: "Xcamp Team",
    },
    SampleResource {
        title: "Recommended Technical Books",
        description: "Technical book recommendations covering programming languages, architecture, algorithms and software engineering.",
        kind: "Learning",
        category: "Resource",
        date: "2023-04-05",
        author: "Xcamp Team",
    },
];

/// Number of rows loaded by [`seed_database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub resources: usize,
}

/// Drops and recreates every table, then loads the sample projects and resources.
///
/// All existing catalog data is lost.
#[tracing::instrument(skip(db))]
pub async fn seed_database(db: &DatabaseConnection) -> Result<SeedSummary, DbErr> {
    migration::Migrator::fresh(db).await?;
    tracing::info!("Database reset");

    let now = Utc::now();
    let projects = PROJECTS.iter().map(|sample| project::ActiveModel {
        title: ActiveValue::Set(sample.title.to_string()),
        description: ActiveValue::Set(sample.description.to_string()),
        icon: ActiveValue::Set(sample.icon.to_string()),
        color: ActiveValue::Set(sample.color.to_string()),
        category: ActiveValue::Set(sample.category.to_string()),
        tags: ActiveValue::Set(Tags(sample.tags.iter().map(|t| t.to_string()).collect())),
        link: ActiveValue::Set(crate::project::DEFAULT_LINK.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    });
    project::Entity::insert_many(projects).exec(db).await?;
    tracing::info!("Created {} projects", PROJECTS.len());

    let resources = RESOURCES.iter().map(|sample| resource::ActiveModel {
        title: ActiveValue::Set(sample.title.to_string()),
        description: ActiveValue::Set(sample.description.to_string()),
        kind: ActiveValue::Set(sample.kind.to_string()),
        category: ActiveValue::Set(sample.category.to_string()),
        date: ActiveValue::Set(sample.date.to_string()),
        author: ActiveValue::Set(sample.author.to_string()),
        link: ActiveValue::Set(crate::resource::DEFAULT_LINK.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    });
    resource::Entity::insert_many(resources).exec(db).await?;
    tracing::info!("Created {} resources", RESOURCES.len());

    Ok(SeedSummary {
        projects: PROJECTS.len(),
        resources: RESOURCES.len(),
    })
}
