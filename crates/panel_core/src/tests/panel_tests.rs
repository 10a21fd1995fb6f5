use std::{cell::RefCell, rc::Rc, sync::Arc};

use shared::{catalog::Catalog, domain::TargetId};

use super::*;
use crate::{
    boundary::TargetRegion,
    interaction::{InteractionBus, InteractionEvent},
};

const PANEL: TargetId = TargetId(2);
const ARTICLE: TargetId = TargetId(3);

type Applied = Rc<RefCell<Vec<Configuration>>>;

fn panel() -> (
    InteractionBus,
    Applied,
    ArticleParamsPanel<impl FnMut(Configuration)>,
) {
    let bus = InteractionBus::new();
    let applied: Applied = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&applied);
    let sink = move |config: Configuration| log.borrow_mut().push(config);

    let visibility = PanelVisibilityController::new(bus.clone(), TargetRegion::new([PANEL]));
    let draft = DraftConfigController::new(Arc::new(Catalog::builtin()), sink).expect("draft");
    (bus, applied, ArticleParamsPanel::new(visibility, draft))
}

#[test]
fn snapshot_reflects_visibility_and_draft() {
    let (_, _, mut panel) = panel();
    assert!(!panel.snapshot().is_open());

    panel.handle(PanelCommand::Toggle).expect("toggle");
    panel
        .handle(PanelCommand::Select {
            slot: Slot::FontSize,
            id: "25px".into(),
        })
        .expect("select");

    let snapshot = panel.snapshot();
    assert!(snapshot.is_open());
    assert_eq!(snapshot.draft.font_size.id, "25px");
}

#[test]
fn submit_and_reset_leave_panel_open() {
    let (_, applied, mut panel) = panel();
    panel.handle(PanelCommand::Toggle).expect("toggle");

    panel.handle(PanelCommand::Submit).expect("submit");
    panel.handle(PanelCommand::Reset).expect("reset");

    assert!(panel.visibility().is_open());
    assert_eq!(applied.borrow().len(), 2);
}

#[test]
fn rejected_select_leaves_draft_untouched() {
    let (_, _, mut panel) = panel();
    let before = panel.snapshot().draft;

    let err = panel
        .handle(PanelCommand::Select {
            slot: Slot::ContentWidth,
            id: "25px".into(),
        })
        .expect_err("should fail");

    assert!(matches!(err, PanelError::UnknownOption { .. }));
    assert_eq!(panel.snapshot().draft, before);
}

#[test]
fn outside_pointer_down_closes_panel_but_keeps_draft() {
    let (bus, applied, mut panel) = panel();
    panel.handle(PanelCommand::Toggle).expect("toggle");
    panel
        .handle(PanelCommand::Select {
            slot: Slot::FontFamily,
            id: "merriweather".into(),
        })
        .expect("select");

    bus.dispatch(InteractionEvent::pointer_down(ARTICLE));

    let snapshot = panel.snapshot();
    assert!(!snapshot.is_open());
    assert_eq!(snapshot.draft.font_family.id, "merriweather");
    assert!(applied.borrow().is_empty());
}

#[test]
fn commands_deserialize_from_snake_case_json() {
    let commands: Vec<PanelCommand> = serde_json::from_str(
        r#"["toggle", {"select": {"slot": "backgroundColor", "id": "gray"}}, "submit", "reset"]"#,
    )
    .expect("commands");

    assert_eq!(
        commands,
        vec![
            PanelCommand::Toggle,
            PanelCommand::Select {
                slot: Slot::BackgroundColor,
                id: "gray".into(),
            },
            PanelCommand::Submit,
            PanelCommand::Reset,
        ]
    );
}
