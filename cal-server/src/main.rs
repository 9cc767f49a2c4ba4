use anyhow::Context;
use axum::{routing::get, Router};
use std::{net::SocketAddr, path::PathBuf};

mod content;
mod error;
mod extractors;
mod front_matter;
mod handlers;
mod navigation;

use content::{CourseRoot, EntryOrder};
use error::Error;
use extractors::AppState;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Directory holding one subdirectory per course
    #[structopt(
        long,
        env = "COURSES_ROOT",
        default_value = "src/courses",
        parse(from_os_str)
    )]
    courses_root: PathBuf,

    /// Address to listen on
    #[structopt(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Order of sections and lessons: "filesystem" or "name"
    #[structopt(long, env = "ENTRY_ORDER", default_value = "filesystem")]
    entry_order: EntryOrder,
}

pub fn app(courses: CourseRoot) -> Router {
    let course_pages = Router::new()
        .route("/:slug", get(handlers::course_index))
        .route("/:slug/:section", get(handlers::course_section))
        .route("/:slug/:section/:lesson", get(handlers::course_lesson));
    Router::new()
        .nest(handlers::COURSE_ROUTE_PREFIX, course_pages)
        .route("/api/course/:slug", get(handlers::fetch_course))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(AppState { courses })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opt = <Opt as structopt::StructOpt>::from_args();
    let courses = CourseRoot::open(&opt.courses_root, opt.entry_order)
        .context("opening courses root")?;
    tracing::info!(root = ?courses.path(), order = ?opt.entry_order, "serving courses");

    let app = app(courses);

    tracing::info!("listening on {}", opt.listen);
    axum::Server::bind(&opt.listen)
        .serve(app.into_make_service())
        .await
        .context("serving axum webserver")
}
