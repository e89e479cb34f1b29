//! Integration tests for editor crate

use openbuild_document::visitor::{count_elements, find_duplicate_id};
use openbuild_document::{
    Breakpoint, Element, ElementType, ItemType, PageSetting, ProjectData, StyleMap, StyleValue,
};
use openbuild_editor::{
    EditSession, EditorError, ElementUpdate, StyleSuggestionRequest, StyleSuggestionResponse,
    SuggestionError,
};

fn style(
    session: &EditSession,
    id: &str,
    breakpoint: Breakpoint,
    property: &str,
) -> Option<String> {
    session
        .document
        .computed_styles(id, breakpoint)
        .unwrap()
        .get(property)
        .map(StyleValue::to_string)
}

#[test]
fn test_first_button_on_empty_page() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    session.add_element(ElementType::Button.into(), None)?;

    let elements = session.document.to_elements();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].element_type, ElementType::Button);
    assert_eq!(elements[0].content.as_deref(), Some("Click Me"));
    assert_eq!(
        elements[0].styles.desktop.get("backgroundColor"),
        Some(&StyleValue::from("hsl(var(--primary))"))
    );
    Ok(())
}

#[test]
fn test_paragraph_lands_inside_div() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    let div = session.add_element(ElementType::Div.into(), None)?.id;
    let p = session.add_element(ElementType::P.into(), Some(div.as_str()))?.id;

    let elements = session.document.to_elements();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].children.len(), 1);
    assert_eq!(elements[0].children[0].id, p);
    Ok(())
}

#[test]
fn test_rename_changes_only_the_name() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    session.add_element(ItemType::Card, None)?;
    let row = session.add_element(ItemType::SectionColumns, None)?.id;
    let column = session.document.child_ids(row.as_str())?[1].clone();
    let before = session.document.to_elements();

    session.update_element(column.as_str(), ElementUpdate::name("X"))?;

    let after = session.document.to_elements();
    let mut expected = before;
    expected[1].children[1].name = "X".to_string();
    assert_eq!(after, expected);
    Ok(())
}

#[test]
fn test_delete_leaf_and_subtree_counts() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    let card = session.add_element(ItemType::Card, None)?.id;
    let image = session.document.child_ids(card.as_str())?[0].clone();
    let total = session.document.len();

    session.delete_element(image.as_str())?;
    assert_eq!(session.document.len(), total - 1);
    assert!(session.document.to_elements()[0].find(image.as_str()).is_none());

    let removed = session.delete_element(card.as_str())?;
    assert_eq!(removed.len(), 4);
    assert!(session.document.is_empty());
    Ok(())
}

#[test]
fn test_selection_follows_updates_and_deletes() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    let heading = session.add_element(ElementType::H1.into(), None)?.id;

    session.update_element(
        heading.as_str(),
        ElementUpdate {
            content: Some("Welcome".to_string()),
            styles: Some(openbuild_document::ResponsiveStyles::desktop(StyleMap::from_pairs(&[(
                "color", "navy",
            )]))),
            ..Default::default()
        },
    )?;
    let selected = session.selected().expect("heading stays selected");
    assert_eq!(selected.content.as_deref(), Some("Welcome"));
    assert_eq!(selected.styles.desktop.get("color"), Some(&StyleValue::from("navy")));

    session.delete_element(heading.as_str())?;
    assert!(session.selected().is_none());
    Ok(())
}

#[test]
fn test_responsive_editing_keeps_buckets_apart() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    let p = session.add_element(ElementType::P.into(), None)?.id;

    session.set_viewport_mode(Breakpoint::Tablet);
    session.update_selected_style(StyleMap::from_pairs(&[("fontSize", "0.9rem")]))?;
    session.set_viewport_mode(Breakpoint::Mobile);
    session.update_selected_style(StyleMap::from_pairs(&[("color", "gray")]))?;

    let font_size = |breakpoint| style(&session, p.as_str(), breakpoint, "fontSize");
    assert_eq!(font_size(Breakpoint::Desktop).as_deref(), Some("1rem"));
    assert_eq!(font_size(Breakpoint::Tablet).as_deref(), Some("0.9rem"));
    assert_eq!(font_size(Breakpoint::Mobile).as_deref(), Some("0.9rem"));
    assert_eq!(style(&session, p.as_str(), Breakpoint::Tablet, "color"), None);
    assert_eq!(style(&session, p.as_str(), Breakpoint::Mobile, "color").as_deref(), Some("gray"));
    Ok(())
}

#[test]
fn test_project_save_and_reload() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    session.update_page_setting(PageSetting::PageTitle, "Spring Sale");
    let list = session.add_element(ElementType::Ul.into(), None)?.id;
    session.add_list_item(list.as_str())?;
    session.add_element(ItemType::Card, None)?;

    let json = session.to_project().to_json()?;

    let mut reloaded = EditSession::new();
    reloaded.load_project(&json)?;

    assert_eq!(reloaded.page_settings().page_title, "Spring Sale");
    assert_eq!(reloaded.document.to_elements(), session.document.to_elements());
    assert!(reloaded.selected().is_none());

    // New ids continue after the loaded ones
    let added = reloaded.add_element(ElementType::Span.into(), None)?.id;
    assert!(!session.document.contains(added.as_str()));
    assert!(find_duplicate_id(&reloaded.document.to_elements()).is_none());
    Ok(())
}

#[test]
fn test_failed_load_leaves_session_untouched() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    session.update_page_setting(PageSetting::PageTitle, "Keep me");
    let id = session.add_element(ElementType::H2.into(), None)?.id;

    for bad in [
        "{ not json",
        r#"{ "openBuildVersion": 2, "pageSettings": {}, "elements": [] }"#,
        r#"{ "openBuildVersion": "1.0.0", "elements": [] }"#,
        r#"{ "openBuildVersion": "1.0.0", "pageSettings": {}, "elements": "none" }"#,
    ] {
        assert!(matches!(session.load_project(bad), Err(EditorError::Project(_))));
    }

    assert_eq!(session.page_settings().page_title, "Keep me");
    assert_eq!(session.selected_id(), Some(&id));
    assert_eq!(session.document.len(), 1);
    Ok(())
}

#[test]
fn test_from_project_with_nested_tree() -> anyhow::Result<()> {
    let project = ProjectData::new(
        Default::default(),
        vec![Element::new("wrap", ElementType::Div)
            .with_child(Element::new("t", ElementType::P).with_content("Hi"))
            .with_child(
                Element::new("u", ElementType::Ul).with_child(Element::new("i", ElementType::Li)),
            )],
    );

    let mut session = EditSession::from_project(project)?;
    session.add_list_item("u")?;

    assert_eq!(count_elements(&session.document.to_elements()), 5);
    assert_eq!(session.document.parent_id("i").map(|id| id.as_str()), Some("u"));
    Ok(())
}

#[test]
fn test_suggestion_is_staged_then_applied() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    let button = session.add_element(ElementType::Button.into(), None)?.id;
    let version = session.document.version;

    let suggester = |request: &StyleSuggestionRequest| -> Result<
        StyleSuggestionResponse,
        SuggestionError,
    > {
        assert_eq!(request.element_description, "rounded green button");
        Ok(StyleSuggestionResponse {
            css_rules: "background-color: green; border-radius: 999px;".to_string(),
        })
    };

    let staged = session.request_suggestion(&suggester, "  rounded green button ")?.to_string();
    assert!(staged.contains("green"));
    assert_eq!(session.document.version, version);

    session.set_viewport_mode(Breakpoint::Tablet);
    let applied = session.apply_suggestion()?;

    assert_eq!(applied.len(), 2);
    assert!(session.suggested_css().is_none());
    assert_eq!(
        style(&session, button.as_str(), Breakpoint::Tablet, "borderRadius").as_deref(),
        Some("999px")
    );
    assert_eq!(
        style(&session, button.as_str(), Breakpoint::Desktop, "backgroundColor").as_deref(),
        Some("hsl(var(--primary))")
    );
    Ok(())
}

#[test]
fn test_suggestion_errors() -> anyhow::Result<()> {
    let mut session = EditSession::new();
    let failing = |_: &StyleSuggestionRequest| -> Result<StyleSuggestionResponse, SuggestionError> {
        Err(SuggestionError::Service("timeout".to_string()))
    };

    assert!(matches!(session.apply_suggestion(), Err(EditorError::NothingSelected)));

    session.add_element(ElementType::Div.into(), None)?;
    assert!(matches!(session.apply_suggestion(), Err(EditorError::NoSuggestion)));

    assert!(matches!(
        session.request_suggestion(&failing, "anything"),
        Err(EditorError::Suggestion(SuggestionError::Service(_)))
    ));
    assert!(matches!(
        session.request_suggestion(&failing, "   "),
        Err(EditorError::Suggestion(SuggestionError::EmptyDescription))
    ));
    assert!(session.suggested_css().is_none());
    Ok(())
}
