//! Panel detection regression test
//!
//! Runs the full detector over synthetic pages with known layouts and checks
//! the bounds, cap, determinism and small-area invariants.

use komawari_core::{PixelSource, Rect};
use komawari_layout::{
    AdaptivePanelDetector, DetectionRequest, DetectionResult, LayoutType, PanelDetector,
};
use komawari_test::{BLACK, RegParams, SyntheticPage, grid_page};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect(page: &dyn PixelSource) -> DetectionResult {
    let request = DetectionRequest::builder(page).build().unwrap();
    AdaptivePanelDetector::default().detect(&request)
}

fn check_bounds(rp: &mut RegParams, result: &DetectionResult) {
    for seq in result.sequences() {
        for panel in &seq.panels {
            let inside = panel.bounds.is_within(seq.page_size);
            rp.compare_values(1.0, if inside { 1.0 } else { 0.0 }, 0.0);
        }
    }
}

#[test]
fn detect_reg() {
    init_logger();
    let mut rp = RegParams::new("detect");

    // --- Test 1: 2x2 framed grid ---
    eprintln!("=== 2x2 grid ===");
    // panels 370x270 at x in {20, 410}, y in {20, 310}; padding 7px x 5px
    let page = grid_page(800, 600, 2, 2, 20, 10).unwrap();
    let result = detect(&page);
    rp.compare_values(0.0, result.issues.len() as f64, 0.0);
    rp.compare_values(4.0, result.primary.panel_count() as f64, 0.0);
    rp.compare_values(
        1.0,
        if result.primary.layout_type == LayoutType::Detected { 1.0 } else { 0.0 },
        0.0,
    );
    let expected = [
        Rect::new(13, 15, 397, 295).unwrap(),
        Rect::new(403, 15, 787, 295).unwrap(),
        Rect::new(13, 305, 397, 585).unwrap(),
        Rect::new(403, 305, 787, 585).unwrap(),
    ];
    for (panel, want) in result.primary.panels.iter().zip(expected.iter()) {
        rp.compare_rects(want, &panel.bounds);
        if rp.display() {
            eprintln!(
                "  panel {}: {} confidence {:.3}",
                panel.id,
                komawari_test::format_rect(&panel.bounds),
                panel.confidence
            );
        }
    }
    // 384 * 280 / 480000
    rp.compare_values(0.224, result.primary.panels[0].confidence as f64, 1e-6);
    rp.compare_values(1.0, result.primary.stats.downscale_factor as f64, 0.0);
    rp.compare_values(480_000.0, result.primary.stats.processed_samples as f64, 0.0);
    check_bounds(&mut rp, &result);

    // --- Test 2: alternatives on success ---
    eprintln!("=== Alternatives ===");
    let types: Vec<_> = result.alternatives.iter().map(|s| s.layout_type).collect();
    rp.compare_values(2.0, types.len() as f64, 0.0);
    rp.compare_values(
        1.0,
        if types == [LayoutType::FallbackFullPage, LayoutType::FallbackVerticalSplit] {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- Test 3: determinism ---
    eprintln!("=== Determinism ===");
    let again = detect(&page);
    rp.compare_values(
        1.0,
        if again.primary.bounds() == result.primary.bounds() { 1.0 } else { 0.0 },
        0.0,
    );
    let ids: Vec<_> = again.primary.panels.iter().map(|p| p.id).collect();
    let first_ids: Vec<_> = result.primary.panels.iter().map(|p| p.id).collect();
    rp.compare_values(1.0, if ids == first_ids { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: downsampled page ---
    eprintln!("=== Downsampled 2x2 grid ===");
    let big = grid_page(2400, 1800, 2, 2, 60, 30).unwrap();
    let result = detect(&big);
    rp.compare_values(2.0, result.primary.stats.downscale_factor as f64, 0.0);
    rp.compare_values(4.0, result.primary.panel_count() as f64, 0.0);
    check_bounds(&mut rp, &result);

    assert!(rp.cleanup());
}

#[test]
fn detect_cap_reg() {
    init_logger();
    let mut rp = RegParams::new("detect_cap");

    // 12 panels of 187x186 with 10px frames
    let page = grid_page(800, 600, 3, 4, 10, 10).unwrap();
    let uncapped = detect(&page);
    rp.compare_values(12.0, uncapped.primary.panel_count() as f64, 0.0);

    for max_panels in [1usize, 5, 12, 20] {
        let request = DetectionRequest::builder(&page)
            .max_panels(max_panels)
            .build()
            .unwrap();
        let result = AdaptivePanelDetector::default().detect(&request);
        let count = result.primary.panel_count();
        eprintln!("  max_panels {} -> {} panels", max_panels, count);
        rp.compare_values(max_panels.min(12) as f64, count as f64, 0.0);
        check_bounds(&mut rp, &result);
    }

    assert!(rp.cleanup());
}

#[test]
fn detect_small_area_reg() {
    init_logger();
    let mut rp = RegParams::new("detect_small_area");

    // 300x300 block, 20x20 block (400px) and a 5x5 block (25px)
    let page = SyntheticPage::blank(800, 600)
        .unwrap()
        .fill_rect(50, 50, 300, 300, BLACK)
        .unwrap()
        .fill_rect(500, 100, 20, 20, BLACK)
        .unwrap()
        .fill_rect(600, 400, 5, 5, BLACK)
        .unwrap()
        .build();

    // --- Test 1: ratio floor (6000px) rejects everything but the big block ---
    eprintln!("=== Default ratio ===");
    let result = detect(&page);
    rp.compare_values(1.0, result.primary.panel_count() as f64, 0.0);
    // 300px block padded by 6px
    rp.compare_rects(
        &Rect::new(44, 44, 356, 356).unwrap(),
        &result.primary.panels[0].bounds,
    );

    // --- Test 2: pixel floor (48) still rejects the 5x5 block ---
    eprintln!("=== Zero ratio ===");
    let request = DetectionRequest::builder(&page)
        .min_panel_area_ratio(0.0)
        .build()
        .unwrap();
    let result = AdaptivePanelDetector::default().detect(&request);
    rp.compare_values(2.0, result.primary.panel_count() as f64, 0.0);
    let small_found = result
        .primary
        .panels
        .iter()
        .any(|p| p.bounds.contains_point(602, 402));
    rp.compare_values(0.0, if small_found { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup());
}
