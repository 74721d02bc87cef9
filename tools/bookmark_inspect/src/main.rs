use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prism_viewer::Bookmark;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Validate a viewer bookmark file and print a summary", version)]
struct Args {
    /// Path to a bookmark JSON file.
    bookmark: PathBuf,

    /// Emit the summary as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize, PartialEq)]
struct Summary {
    models: usize,
    objects_with_state: usize,
    visible_objects: usize,
    annotations: usize,
    clips: usize,
    projection: String,
    eye: [f32; 3],
    look: [f32; 3],
}

fn summarize(bookmark: &Bookmark) -> Summary {
    let visible_objects = bookmark
        .objects
        .values()
        .filter(|state| state.visible == Some(true))
        .count();
    Summary {
        models: bookmark.models.len(),
        objects_with_state: bookmark.objects.len(),
        visible_objects,
        annotations: bookmark.annotations.len(),
        clips: bookmark.clips.len(),
        projection: format!("{:?}", bookmark.projection).to_lowercase(),
        eye: bookmark.lookat.eye,
        look: bookmark.lookat.look,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.bookmark)
        .with_context(|| format!("reading bookmark from {}", args.bookmark.display()))?;
    let bookmark: Bookmark = serde_json::from_str(&text)
        .with_context(|| format!("parsing bookmark JSON at {}", args.bookmark.display()))?;

    for model in &bookmark.models {
        anyhow::ensure!(
            !model.id.is_empty() && !model.src.is_empty(),
            "bookmark lists a model with an empty id or source"
        );
    }

    let summary = summarize(&bookmark);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} model(s), {} object entr(ies), {} visible",
            summary.models, summary.objects_with_state, summary.visible_objects
        );
        println!(
            "{} annotation(s), {} clip plane(s), {} projection",
            summary.annotations, summary.clips, summary.projection
        );
        println!("camera eye {:?} looking at {:?}", summary.eye, summary.look);
    }
    Ok(())
}
