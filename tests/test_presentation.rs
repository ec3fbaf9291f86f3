use log::LevelFilter;
use serde_json::json;

use pokaz::testing::setup_tests_logging;
use pokaz::{
    fire, toggle_frame_animation, Presentation, PresentationError, PresentationOptions, Ratio,
    TickScheduler, INTERVAL_PERIOD, SLIDE_HEIGHT,
};

#[test]
fn test_presentation_from_options_object() {
    setup_tests_logging(LevelFilter::Debug);
    let presentation = Presentation::from_value(json!({
        "highlightStyle": "monokai-sublime",
        "sourceUrl": "index.md",
        "ratio": "16:9",
        "navigation": {
            "scroll": false,
        }
    }))
    .expect("presentation created");
    assert_eq!(presentation.options().highlight_style, "monokai-sublime");
    assert_eq!(presentation.options().source_url, "index.md");
    assert!(!presentation.options().navigation.scroll);
    assert_eq!(
        presentation.ratio(),
        Ratio {
            width: 16,
            height: 9
        }
    );
}

#[test]
fn test_presentation_from_builder_with_defaults() {
    let options = PresentationOptions::new().source_url("index.md");
    let presentation = Presentation::create(options).expect("presentation created");
    assert_eq!(presentation.options().highlight_style, "default");
    assert_eq!(presentation.options().ratio, "4:3");
    assert!(presentation.options().navigation.scroll);
}

#[test]
fn test_presentation_from_builder_with_every_option() {
    let options = PresentationOptions::new()
        .highlight_style("monokai-sublime")
        .source_url("index.md")
        .ratio("16:9")
        .scroll(false);
    let presentation = Presentation::create(options).expect("presentation created");
    assert_eq!(presentation.options().highlight_style, "monokai-sublime");
    assert_eq!(presentation.options().source_url, "index.md");
    assert!(!presentation.options().navigation.scroll);
    assert_eq!(
        presentation.ratio(),
        Ratio {
            width: 16,
            height: 9
        }
    );
}

#[test]
fn test_root_element_animates() {
    let mut scheduler = TickScheduler::new();
    let options = PresentationOptions::new().source_url("index.md");
    let mut presentation = Presentation::create(options).expect("presentation created");
    toggle_frame_animation(presentation.root_mut(), &mut scheduler);
    for handle in scheduler.tick(INTERVAL_PERIOD) {
        fire(presentation.root_mut(), handle, &mut scheduler);
    }
    assert_eq!(presentation.root().translate_x(), 1.0);
}

#[test]
fn test_root_element_size_follows_ratio() {
    let options = PresentationOptions::new().source_url("index.md").ratio("16:9");
    let presentation = Presentation::create(options).expect("presentation created");
    let [width, height] = presentation.root().size;
    assert_eq!(height, SLIDE_HEIGHT);
    assert_eq!(width, SLIDE_HEIGHT * 16.0 / 9.0);
}

#[test]
fn test_invalid_ratio_is_rejected() {
    let options = PresentationOptions::new().source_url("index.md").ratio("wide");
    match Presentation::create(options) {
        Err(PresentationError::InvalidRatio(ratio)) => assert_eq!(ratio, "wide"),
        _ => panic!("ratio must be rejected"),
    }
    assert!(Ratio::parse("16:0").is_err());
    assert!(Ratio::parse("16:9:3").is_err());
    assert!(Ratio::parse("16").is_err());
}

#[test]
fn test_missing_source_is_rejected() {
    match Presentation::create(PresentationOptions::new()) {
        Err(PresentationError::SourceNotSpecified) => {}
        _ => panic!("source must be required"),
    }
}

#[test]
fn test_malformed_options_object_is_rejected() {
    setup_tests_logging(LevelFilter::Debug);
    let result = Presentation::from_value(json!({
        "sourceUrl": "index.md",
        "navigation": "scroll",
    }));
    assert!(matches!(result, Err(PresentationError::Options(_))));
}
