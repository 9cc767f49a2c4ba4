use anyhow::{anyhow, Context};
use cal_api::{Course, CourseMetadata};

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(short, long, env = "CAL_HOST", default_value = "http://127.0.0.1:3000")]
    host: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Print the sections and lessons of a course
    Show {
        /// Course slug
        slug: String,
    },

    /// Print the lesson a course page redirects to
    FirstLesson {
        /// Course slug
        slug: String,
    },
}

/// Turns error responses into the api error they carry
async fn check(resp: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() || status.is_redirection() {
        return Ok(resp);
    }
    let body = resp.bytes().await.context("reading error response body")?;
    let err = cal_api::Error::parse(&body)
        .with_context(|| format!("parsing error response with status {status}"))?;
    Err(anyhow::Error::from(err).context(format!("server answered {status}")))
}

fn print_course(course: &Course) {
    let metadata = &course.metadata;
    println!(
        "{} ({}), {} lessons",
        metadata.title,
        course.slug,
        course.lesson_count()
    );
    if let Some(kind) = &metadata.course_type {
        println!("  type: {kind}");
    }
    if let Some(cost) = CourseMetadata::text(&metadata.cost) {
        let currency = CourseMetadata::text(&metadata.currency).unwrap_or_default();
        println!("  cost: {cost} {currency}");
    }
    for section in &course.sections {
        let lock = if section.published { "" } else { " (locked)" };
        println!("  [{}] {}{lock}", section.section_slug, section.title);
        for lesson in section.lessons() {
            println!("    {}. {} ({})", lesson.position, lesson.title, lesson.filename);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = <Opt as structopt::StructOpt>::from_args();

    match opt.cmd {
        Command::Show { slug } => {
            let client = reqwest::Client::new();
            let resp = client
                .get(format!("{}/api/course/{}", opt.host, urlencoding::encode(&slug)))
                .send()
                .await
                .with_context(|| format!("fetching course {slug:?}"))?;
            let course: Course = check(resp)
                .await?
                .json()
                .await
                .context("parsing course")?;
            print_course(&course);
        }
        Command::FirstLesson { slug } => {
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .context("building http client")?;
            let resp = client
                .get(format!("{}/course/{}", opt.host, urlencoding::encode(&slug)))
                .send()
                .await
                .with_context(|| format!("fetching course page {slug:?}"))?;
            let resp = check(resp).await?;
            let location = resp
                .headers()
                .get(reqwest::header::LOCATION)
                .ok_or_else(|| anyhow!("course page did not redirect"))?
                .to_str()
                .context("redirect location is not valid text")?;
            println!("{location}");
        }
    }

    Ok(())
}
