use std::path::Path;

use netlayer_renderer::{
    LayoutConfig, RenderError, Theme, compute_layout, parse_network, render_svg,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("fixture read failed")
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xDECAF)
}

#[test]
fn basic_fixture_renders_the_expected_canvas() {
    let network = parse_network(&fixture("basic.json")).expect("parse failed");
    let layout = compute_layout(&network, &LayoutConfig::default(), &mut rng()).expect("layout failed");

    assert_eq!(layout.width, 300.0);
    assert_eq!(layout.height, 400.0);

    let mut slots: Vec<usize> = layout.nodes.iter().map(|n| n.slot).collect();
    slots.sort_unstable();
    assert_eq!(slots, [0, 1, 2]);

    let svg = render_svg(&layout, &Theme::dark(), &LayoutConfig::default());
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<line").count(), 1);

    let a = layout.nodes.iter().find(|n| n.id == "a").unwrap();
    let c = layout.nodes.iter().find(|n| n.id == "c").unwrap();
    assert_eq!(layout.edges[0].start, a.anchor);
    assert_eq!(layout.edges[0].end, c.anchor);
}

#[test]
fn dense_fixture_places_every_node_on_its_own_level() {
    let network = parse_network(&fixture("dense.json")).expect("parse failed");
    let layout = compute_layout(&network, &LayoutConfig::default(), &mut rng()).expect("layout failed");

    assert_eq!(layout.nodes.len(), 10);
    assert_eq!(layout.edges.len(), 12);
    assert_eq!(layout.width, 400.0);
    assert_eq!(layout.height, 1100.0);

    let mut levels: Vec<f32> = layout.nodes.iter().map(|n| n.y).collect();
    levels.sort_by(|a, b| a.partial_cmp(b).unwrap());
    levels.dedup();
    assert_eq!(levels.len(), 10);
}

#[test]
fn repeated_runs_never_exhaust_the_pool() {
    let network = parse_network(&fixture("dense.json")).expect("parse failed");
    for _ in 0..20 {
        compute_layout(&network, &LayoutConfig::default(), &mut rand::rng())
            .expect("consistent input must always lay out");
    }
}

#[test]
fn unknown_reference_fixture_aborts_without_a_layout() {
    let network = parse_network(&fixture("unknown_reference.json")).expect("parse failed");
    let err = compute_layout(&network, &LayoutConfig::default(), &mut rng()).unwrap_err();
    assert!(matches!(err, RenderError::UnknownNodeReference(id) if id == "ghost"));
}

#[test]
fn count_mismatch_fixture_aborts_without_a_layout() {
    let network = parse_network(&fixture("count_mismatch.json")).expect("parse failed");
    let err = compute_layout(&network, &LayoutConfig::default(), &mut rng()).unwrap_err();
    assert!(matches!(
        err,
        RenderError::CountMismatch {
            declared: 4,
            found: 3
        }
    ));
}

#[test]
fn empty_fixture_still_renders_a_document() {
    let network = parse_network(&fixture("empty.json")).expect("parse failed");
    let layout = compute_layout(&network, &LayoutConfig::default(), &mut rng()).expect("layout failed");
    assert_eq!(layout.width, 100.0);
    assert_eq!(layout.height, 100.0);

    let svg = render_svg(&layout, &Theme::dark(), &LayoutConfig::default());
    assert_eq!(svg.matches("<circle").count(), 0);
    assert_eq!(svg.matches("<line").count(), 0);
}

#[cfg(feature = "png")]
mod png {
    use super::*;
    use netlayer_renderer::render::write_output_png;
    use resvg::tiny_skia::Pixmap;

    #[test]
    fn basic_fixture_writes_a_png_of_the_computed_size() {
        let network = parse_network(&fixture("basic.json")).expect("parse failed");
        let layout =
            compute_layout(&network, &LayoutConfig::default(), &mut rng()).expect("layout failed");
        let svg = render_svg(&layout, &Theme::dark(), &LayoutConfig::default());

        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("basic.png");
        write_output_png(&svg, &out).expect("png write failed");

        let pixmap = Pixmap::load_png(&out).expect("png read failed");
        assert_eq!(pixmap.width(), 300);
        assert_eq!(pixmap.height(), 400);
    }

    #[test]
    fn empty_fixture_still_produces_an_output_file() {
        let network = parse_network(&fixture("empty.json")).expect("parse failed");
        let layout =
            compute_layout(&network, &LayoutConfig::default(), &mut rng()).expect("layout failed");
        let svg = render_svg(&layout, &Theme::dark(), &LayoutConfig::default());

        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("empty.png");
        write_output_png(&svg, &out).expect("png write failed");

        let pixmap = Pixmap::load_png(&out).expect("png read failed");
        assert_eq!(pixmap.width(), 100);
        assert_eq!(pixmap.height(), 100);
    }
}
