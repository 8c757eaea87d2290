//! Integration tests for plinth.
//!
//! These tests exercise the public API from outside the crate: stylesheets
//! flowing into projects, render batching, and the markup editor driven
//! through the headless pilot.

use plinth::dom::Project;
use plinth::editor::{EditorError, SyncState};
use plinth::event::Key;
use plinth::geometry::{Point, Rect};
use plinth::markup::{parse_object, resolve_span, write_object, WidgetKind};
use plinth::render::{DrawCommand, RecordingBackend, RenderContext, SurfaceId};
use plinth::style::{
    Color, DesktopStyle, Font, ResourceSet, StyleCategory, StyleDescriptor, StyleStore,
    TextureAtlas, DEFAULT_STYLE_NAME,
};
use plinth::testing::EditorPilot;
use pretty_assertions::assert_eq;
use tokio::runtime::Handle;

fn resources() -> ResourceSet {
    ResourceSet::new()
        .with_atlas(
            "ui",
            TextureAtlas::new(SurfaceId(1))
                .with_region("button", Rect::new(0, 0, 32, 16))
                .with_region("panel", Rect::new(32, 0, 16, 16)),
        )
        .with_font("default", Font::new("default", 18))
}

const STYLESHEET: &str = r##"{
    "desktop": { "background": "#202020" },
    "label": {
        "default": { "font": "default", "textColor": "white" },
        "title": { "font": "default", "textColor": "yellow" }
    },
    "button": {
        "default": { "background": "button", "padding": 2 },
        "danger": { "background": "ui#button", "label": { "textColor": "red" } }
    }
}"##;

// ---------------------------------------------------------------------------
// Style resolution
// ---------------------------------------------------------------------------

#[test]
fn categories_with_default_always_resolve() {
    let store = resources().load_stylesheet(STYLESHEET).unwrap();
    let resolver = store.resolver();
    for category in [StyleCategory::Label, StyleCategory::Button] {
        for name in [None, Some(""), Some("title"), Some("danger"), Some("nope")] {
            assert!(resolver.resolve(category, name).is_some(), "{category} {name:?}");
        }
    }
}

#[test]
fn categories_without_default_resolve_to_none() {
    let store = resources().load_stylesheet(STYLESHEET).unwrap();
    let resolver = store.resolver();
    for category in StyleCategory::ALL {
        if store.default_style(category).is_some() {
            continue;
        }
        for name in [None, Some(""), Some("title"), Some("anything")] {
            assert!(resolver.resolve(category, name).is_none());
        }
    }
}

#[test]
fn stylesheet_applies_to_project() {
    let store = resources().load_stylesheet(STYLESHEET).unwrap();
    let mut project = Project::from_markup(
        r#"<Project StylesheetPath="ui.json">
             <VerticalStackPanel>
               <Label Id="heading" StyleName="title" Text="Settings" />
               <Button Id="delete" StyleName="danger" Text="Delete" />
               <CheckBox Id="check" />
             </VerticalStackPanel>
           </Project>"#,
    )
    .unwrap();

    assert_eq!(project.apply_stylesheet(&store), 2);

    let style = |id: &str| {
        let node = project.find(id).unwrap();
        project.dom().get(node).unwrap().style.clone()
    };
    let heading = style("heading").unwrap();
    assert_eq!(heading.as_label().unwrap().text_color, Some(Color::rgb(255, 255, 0)));
    let delete = style("delete").unwrap();
    assert_eq!(
        delete.as_button().unwrap().label.as_ref().unwrap().text_color,
        Some(Color::rgb(255, 0, 0))
    );
    assert_eq!(style("check"), None);

    assert_eq!(
        store.resolver().desktop(),
        Some(&DesktopStyle {
            background: Some(plinth::style::Brush::Solid(Color::rgb(0x20, 0x20, 0x20))),
        })
    );
}

#[test]
fn resolved_styles_are_independent_copies() {
    let mut store = StyleStore::new();
    store.insert(
        StyleCategory::Button,
        DEFAULT_STYLE_NAME,
        StyleDescriptor::Button(Default::default()),
    );
    let mut project = Project::from_markup("<Project><Button /></Project>").unwrap();
    project.apply_stylesheet(&store);

    let root = project.dom().root().unwrap();
    let node = project.dom_mut().get_mut(root).unwrap();
    node.style.as_mut().unwrap().widget_mut().width = Some(99);

    let original = store.default_style(StyleCategory::Button).unwrap();
    assert_eq!(original.widget().width, None);
}

// ---------------------------------------------------------------------------
// Render batching
// ---------------------------------------------------------------------------

fn context() -> RenderContext<RecordingBackend> {
    RenderContext::new(RecordingBackend::new(Rect::new(0, 0, 320, 240)))
}

#[test]
fn flush_keeps_every_draw_once() {
    let mut ctx = context();
    ctx.flush();
    assert!(ctx.backend().batches().is_empty());

    ctx.begin().unwrap();
    ctx.draw(DrawCommand::new(SurfaceId(1), Rect::new(0, 0, 8, 8))).unwrap();
    ctx.flush();
    ctx.draw(DrawCommand::new(SurfaceId(2), Rect::new(8, 0, 8, 8))).unwrap();
    ctx.end().unwrap();

    let batches = ctx.backend().batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].draws.len(), 1);
    assert_eq!(batches[1].draws.len(), 1);
    let surfaces: Vec<_> = ctx.backend().draws().map(|d| d.surface).collect();
    assert_eq!(surfaces, vec![SurfaceId(1), SurfaceId(2)]);
}

#[test]
fn consecutive_scissors_partition_draws() {
    let mut ctx = context();
    let first = Rect::new(0, 0, 100, 100);
    let second = Rect::new(50, 50, 100, 100);

    ctx.begin().unwrap();
    ctx.set_scissor(first);
    ctx.draw_rect(SurfaceId(1), Rect::new(10, 10, 5, 5), Color::WHITE).unwrap();
    ctx.set_scissor(second);
    ctx.draw_rect(SurfaceId(1), Rect::new(60, 60, 5, 5), Color::WHITE).unwrap();
    ctx.end().unwrap();

    let batches: Vec<_> = ctx.backend().non_empty_batches().collect();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].scissor, first);
    assert_eq!(batches[0].draws[0].dest.origin(), Point::new(10, 10));
    assert_eq!(batches[1].scissor, second);
    assert_eq!(batches[1].draws[0].dest.origin(), Point::new(60, 60));
}

#[test]
fn draws_outside_a_session_fail() {
    let mut ctx = context();
    assert!(ctx.draw(DrawCommand::new(SurfaceId(1), Rect::new(0, 0, 1, 1))).is_err());
    assert!(ctx.end().is_err());
    ctx.begin().unwrap();
    assert!(ctx.begin().is_err());
}

// ---------------------------------------------------------------------------
// Markup round trip and span resolution
// ---------------------------------------------------------------------------

#[test]
fn untouched_object_round_trips() {
    let text = r#"<Button Text="Hi" />"#;
    let span = resolve_span(text, 3).unwrap();
    let object = parse_object(&span.parse_text(text)).unwrap();
    let spliced = format!(
        "{}{}{}",
        &text[..span.start],
        write_object(&object),
        &text[span.end + 1..]
    );
    assert_eq!(spliced, text);
}

#[test]
fn needs_close_tag_detection() {
    let open = r#"<Label Text="x">"#;
    assert!(resolve_span(open, 3).unwrap().needs_close_tag);
    let closed = r#"<Label Text="x"/>"#;
    assert!(!resolve_span(closed, 3).unwrap().needs_close_tag);
}

#[test]
fn unterminated_tag_has_no_span() {
    for cursor in 0..=7 {
        assert_eq!(resolve_span("<Button", cursor), None);
    }
}

// ---------------------------------------------------------------------------
// Editor scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn grid_button_write_back() {
    let mut pilot = EditorPilot::new(Handle::current());
    pilot.load("<Grid><Button/></Grid>");
    assert!(pilot.click_in("<Button"));

    let span = pilot.engine().span().unwrap();
    assert_eq!(&pilot.text()[span.start..=span.end], "<Button/>");

    pilot.settle().await;
    pilot.edit(|button| button.set("Text", "OK")).unwrap();
    assert_eq!(pilot.text(), r#"<Grid><Button Text="OK" /></Grid>"#);
}

#[tokio::test]
async fn stale_result_does_not_replace_object() {
    let mut pilot = EditorPilot::new(Handle::current());
    pilot.load("<Panel>\n  <Label Text=\"A\" />\n  <Button Text=\"B\" />\n</Panel>");

    pilot.click_in("<Label");
    pilot.click_in("<Button");
    pilot.settle().await;
    assert_eq!(pilot.object().unwrap().kind(), WidgetKind::Button);
    assert_eq!(pilot.object().unwrap().text(), Some("B"));

    pilot.click_in("<Label");
    pilot.press_key(Key::Home);
    pilot.settle().await;
    assert_eq!(pilot.state(), SyncState::Unfocused);
    assert!(pilot.object().is_none());
}

#[tokio::test]
async fn malformed_buffer_never_panics() {
    let mut pilot = EditorPilot::new(Handle::current());
    pilot.load("<Button");
    for cursor in 0..=7 {
        pilot.move_cursor(cursor);
        assert_eq!(pilot.engine().span(), None);
    }
    pilot.settle().await;
    assert!(matches!(
        pilot.edit(|_| Ok(())),
        Err(EditorError::NoLiveObject)
    ));
}

#[tokio::test]
async fn typing_builds_a_project() {
    let mut pilot = EditorPilot::new(Handle::current());
    pilot.type_text("<Project>\n<Grid>\n<Label Text=\"hi\" />");
    // Closing tags are auto-inserted; a line that starts with one is dedented.
    assert_eq!(
        pilot.text(),
        "<Project>\n<Grid>\n  <Label Text=\"hi\" /></Grid></Project>"
    );

    pilot.engine_mut().format().unwrap();
    assert_eq!(
        pilot.text(),
        "<Project>\n  <Grid>\n    <Label Text=\"hi\" />\n  </Grid>\n</Project>"
    );

    pilot.settle().await;
    let project = pilot.engine().project().unwrap();
    assert_eq!(project.root().unwrap().kind(), WidgetKind::Grid);
    assert_eq!(pilot.engine().status(), "");
}
