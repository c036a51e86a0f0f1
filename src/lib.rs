// src/lib.rs

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod prereq;
pub mod session;
pub mod types;

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::catalogue::StaticCatalogue;
use crate::cli::CliArgs;
use crate::config::{PlanFile, load_and_validate};
use crate::dag::{CourseGraph, Schedule};
use crate::errors::CourseplanError;
use crate::session::PlanSession;
use crate::types::CourseId;

pub use crate::catalogue::{Catalogue, CatalogueError};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan file loading (and `--course` overrides)
/// - course validation against the catalogue
/// - graph building (concurrent unless disabled)
/// - scheduling and output
pub async fn run(args: CliArgs) -> Result<()> {
    let plan = load_plan(&args)?;
    let catalogue = Arc::new(plan.static_catalogue());

    let mut session = PlanSession::new(catalogue, plan.courses.iter().cloned())?;
    session.validate_courses()?;

    let graph = build_graph(&mut session, &plan, args.sequential).await?;

    if args.dry_run {
        print!("{}", render_dry_run(&graph, session.catalogue()));
        return Ok(());
    }

    let schedule = session.schedule_courses(graph)?;
    print_schedule(&schedule);
    Ok(())
}

fn load_plan(args: &CliArgs) -> Result<PlanFile> {
    let plan = load_and_validate(&args.config)?;
    if args.courses.is_empty() {
        return Ok(plan);
    }

    let courses = args
        .courses
        .iter()
        .map(|c| CourseId::parse(c).map_err(CourseplanError::ConfigError))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    info!(courses = ?courses, "using courses from the command line");
    Ok(plan.with_courses(courses)?)
}

async fn build_graph(
    session: &mut PlanSession<StaticCatalogue>,
    plan: &PlanFile,
    force_sequential: bool,
) -> Result<CourseGraph> {
    if force_sequential || !plan.config.concurrent_build {
        debug!("building dependency graph sequentially");
        return Ok(session.build_dependency_graph());
    }

    // Ctrl-C drops the build future: queued lookups are cancelled and results
    // of lookups already running are discarded.
    tokio::select! {
        graph = session.build_dependency_graph_concurrent(plan.config.max_concurrent_lookups) => Ok(graph),
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted; discarding partial dependency graph");
            Err(anyhow::anyhow!("interrupted while building dependency graph"))
        }
    }
}

/// Print `rank: course` lines, then any unlisted-prerequisite warnings.
fn print_schedule(schedule: &Schedule) {
    for scheduled in &schedule.order {
        println!("{}: {}", scheduled.rank, scheduled.course);
    }
    for warning in &schedule.warnings {
        println!();
        println!("{warning}");
    }
}

/// Courses (with catalogue titles where known) and prerequisite edges.
fn render_dry_run(graph: &CourseGraph, catalogue: &StaticCatalogue) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "courseplan dry-run");
    let _ = writeln!(out, "courses ({}):", graph.vertex_count());
    for course in graph.vertices() {
        let in_degree = graph.in_degree_of(course).unwrap_or(0);
        match catalogue.record(course).and_then(|r| r.title.as_deref()) {
            Some(title) => {
                let _ = writeln!(out, "  - {course}: {title} (prerequisites in plan: {in_degree})");
            }
            None => {
                let _ = writeln!(out, "  - {course} (prerequisites in plan: {in_degree})");
            }
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "edges ({}):", graph.edge_count());
    for (u, v) in graph.edges() {
        let _ = writeln!(out, "  {u} -> {v}");
    }
    out
}
