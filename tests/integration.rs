// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests driving the application through its message loop.

use frontier_dash::app::{App, Message, RunPhase, RUN_DURATION};
use frontier_dash::gallery::{self, ImageManifest, ManifestEntry};
use frontier_dash::inputs::{Benchmark, EstimationModel};
use frontier_dash::ui::sidebar;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn write_png(path: &Path, width: u32, height: u32) {
    let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([90, 90, 220, 255]));
    img.save(path).expect("failed to write fixture png");
}

fn send(app: &mut App, message: sidebar::Message) {
    let _ = app.update(Message::Sidebar(message));
}

#[test]
fn each_control_updates_exactly_its_own_field() {
    let mut app = App::default();
    let defaults = app.inputs().clone();

    send(&mut app, sidebar::Message::PortfolioSizeSelected(25));
    send(&mut app, sidebar::Message::MinWeightChanged(5));
    send(&mut app, sidebar::Message::MaxWeightChanged(10));
    send(
        &mut app,
        sidebar::Message::BenchmarkToggled(Benchmark::DowJones, true),
    );

    let inputs = app.inputs();
    assert_eq!(inputs.portfolio_size, 25);
    assert_eq!(inputs.min_weight, 5);
    assert_eq!(inputs.max_weight, 10);
    assert!(inputs.benchmarks.contains(&Benchmark::Sp500));
    assert!(inputs.benchmarks.contains(&Benchmark::DowJones));

    // Untouched fields keep their defaults.
    assert_eq!(inputs.estimation_model, defaults.estimation_model);
    assert_eq!(inputs.in_sample, defaults.in_sample);
    assert_eq!(inputs.out_of_sample, defaults.out_of_sample);
}

#[test]
fn date_input_only_commits_when_it_parses() {
    let mut app = App::default();
    let original = app.inputs().in_sample.start;

    send(
        &mut app,
        sidebar::Message::InSampleStartChanged(String::from("2020-13")),
    );
    assert_eq!(app.inputs().in_sample.start, original);

    send(
        &mut app,
        sidebar::Message::InSampleStartChanged(String::from("2020-06-15")),
    );
    assert_eq!(
        app.inputs().in_sample.start,
        chrono::NaiveDate::from_ymd_opt(2020, 6, 15).expect("valid date")
    );
}

#[test]
fn estimation_model_selection_is_stored() {
    let mut app = App::default();
    assert_eq!(
        app.inputs().estimation_model,
        EstimationModel::HistoricalTimeseries
    );

    send(
        &mut app,
        sidebar::Message::EstimationModelSelected(EstimationModel::FamaFrench5),
    );
    assert_eq!(app.inputs().estimation_model, EstimationModel::FamaFrench5);
}

#[tokio::test]
async fn run_moves_through_running_done_and_back_to_idle() {
    let mut app = App::default();
    assert_eq!(app.phase(), RunPhase::Idle);

    send(&mut app, sidebar::Message::RunPressed);
    assert_eq!(app.phase(), RunPhase::Running);

    // Pressing Run again while running must not restart anything.
    send(&mut app, sidebar::Message::RunPressed);
    assert_eq!(app.phase(), RunPhase::Running);

    let _ = app.update(Message::RunCompleted);
    assert_eq!(app.phase(), RunPhase::Done);
    assert_eq!(app.notifications().visible_count(), 1);

    let _ = app.update(Message::Tick(Instant::now()));
    assert_eq!(app.phase(), RunPhase::Idle);
}

#[tokio::test]
async fn cancel_aborts_a_running_run_without_a_toast() {
    let mut app = App::default();

    send(&mut app, sidebar::Message::RunPressed);
    assert_eq!(app.phase(), RunPhase::Running);

    send(&mut app, sidebar::Message::CancelPressed);
    assert_eq!(app.phase(), RunPhase::Idle);
    assert_eq!(app.notifications().visible_count(), 0);
}

#[test]
fn run_duration_is_three_seconds() {
    assert_eq!(RUN_DURATION, Duration::from_secs(3));
}

#[test]
fn gallery_sections_keep_their_literal_titles_and_order() {
    let app = App::default();
    let titles: Vec<&str> = app
        .sections()
        .iter()
        .map(|section| section.title.as_str())
        .collect();

    assert_eq!(
        titles,
        [
            "Asset Selection",
            "In-sample Efficient Frontiers",
            "Out-of-sample Cumulative Returns",
            "Out-of-sample Risk and Reward",
        ]
    );
}

#[test]
fn a_missing_image_degrades_only_its_own_section() {
    let dir = tempdir().expect("failed to create temp dir");
    let fig1 = dir.path().join("fig1.png");
    let fig3 = dir.path().join("fig3.png");
    let fig4 = dir.path().join("fig4.png");
    write_png(&fig1, 4, 3);
    write_png(&fig3, 2, 2);
    write_png(&fig4, 2, 2);

    let manifest = ImageManifest::new(vec![
        ManifestEntry::new("Asset Selection", &fig1),
        ManifestEntry::new("In-sample Efficient Frontiers", dir.path().join("gone.png")),
        ManifestEntry::new("Out-of-sample Cumulative Returns", &fig3),
        ManifestEntry::new("Out-of-sample Risk and Reward", &fig4),
    ]);

    let (mut app, _task) = App::with_manifest(manifest.clone());
    let _ = app.update(Message::GalleryLoaded(gallery::load_all(&manifest)));

    let sections = app.sections();
    assert!(sections[0].is_ready());
    assert!(sections[1].is_failed());
    assert!(sections[2].is_ready());
    assert!(sections[3].is_ready());
}

#[test]
fn retrying_a_failed_section_recovers_once_the_file_exists() {
    let dir = tempdir().expect("failed to create temp dir");
    let late = dir.path().join("late.png");

    let manifest = ImageManifest::new(vec![ManifestEntry::new("Asset Selection", &late)]);
    let (mut app, _task) = App::with_manifest(manifest.clone());

    let _ = app.update(Message::GalleryLoaded(gallery::load_all(&manifest)));
    assert!(app.sections()[0].is_failed());

    // The file shows up, the user presses Retry.
    write_png(&late, 2, 2);
    let _ = app.update(Message::SectionReloaded(gallery::load_entry(0, &late)));
    assert!(app.sections()[0].is_ready());
}

#[tokio::test]
async fn run_state_is_independent_of_gallery_state() {
    let manifest = ImageManifest::new(vec![ManifestEntry::new(
        "Asset Selection",
        "does/not/exist.png",
    )]);
    let (mut app, _task) = App::with_manifest(manifest.clone());
    let _ = app.update(Message::GalleryLoaded(gallery::load_all(&manifest)));
    assert!(app.sections()[0].is_failed());

    send(&mut app, sidebar::Message::RunPressed);
    assert_eq!(app.phase(), RunPhase::Running);

    let _ = app.update(Message::RunCompleted);
    assert_eq!(app.phase(), RunPhase::Done);
}
