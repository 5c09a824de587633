use std::rc::Rc;

use desktop_app_contract::ApplicationId;
use desktop_runtime::{
    geometry, reduce_desktop, AppCatalog, AppDescriptor, DesktopAction, FrameState, PointerPosition,
    Position, Size, Viewport, WindowFrame, WindowId, WindowManagerConfig, WindowRegistry,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::Value;

const APPS: [&str; 3] = ["about", "terminal", "files"];

fn descriptor(id: &str, default_size: Size, min_size: Size) -> AppDescriptor {
    AppDescriptor {
        id: ApplicationId::trusted(id),
        title: id.to_string(),
        icon: "file".to_string(),
        default_size,
        min_size,
        show_on_desktop: true,
        show_in_taskbar: true,
    }
}

fn catalog() -> Rc<AppCatalog> {
    Rc::new(
        AppCatalog::new(
            WindowManagerConfig::default(),
            vec![
                descriptor("about", Size::new(600, 500), Size::new(400, 300)),
                descriptor("terminal", Size::new(700, 450), Size::new(400, 300)),
                descriptor("files", Size::new(650, 550), Size::new(450, 400)),
            ],
        )
        .expect("test catalog is valid"),
    )
}

fn app(index: usize) -> ApplicationId {
    ApplicationId::trusted(APPS[index % APPS.len()])
}

fn open(registry: &mut WindowRegistry, app_id: &ApplicationId) -> WindowId {
    reduce_desktop(registry, DesktopAction::open(app_id.clone()));
    registry.window_for_app(app_id).expect("window opened")
}

fn frame_for(registry: &WindowRegistry, window_id: WindowId) -> WindowFrame {
    let record = registry.window(window_id).expect("open window");
    let min_size = registry
        .catalog()
        .descriptor(&record.app_id)
        .expect("catalog app")
        .min_size;
    WindowFrame::new(record, min_size, registry.config())
}

fn commit(registry: &mut WindowRegistry, actions: Vec<DesktopAction>) {
    for action in actions {
        reduce_desktop(registry, action);
    }
}

#[derive(Debug, Clone)]
enum Step {
    Open(usize),
    Close(u64),
    Focus(Option<u64>),
    Minimize(u64),
    Restore(u64),
    Move(u64, i32, i32),
    Resize(u64, i32, i32),
}

impl Step {
    fn into_action(self) -> DesktopAction {
        match self {
            Self::Open(index) => DesktopAction::open(app(index)),
            Self::Close(id) => DesktopAction::CloseWindow {
                window_id: WindowId(id),
            },
            Self::Focus(id) => DesktopAction::SetActiveWindow {
                window_id: id.map(WindowId),
            },
            Self::Minimize(id) => DesktopAction::MinimizeWindow {
                window_id: WindowId(id),
            },
            Self::Restore(id) => DesktopAction::RestoreWindow {
                window_id: WindowId(id),
            },
            Self::Move(id, x, y) => DesktopAction::UpdateWindowPosition {
                window_id: WindowId(id),
                position: Position::new(x, y),
            },
            Self::Resize(id, width, height) => DesktopAction::UpdateWindowSize {
                window_id: WindowId(id),
                size: Size::new(width, height),
            },
        }
    }
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..3).prop_map(Step::Open),
        (0u64..8).prop_map(Step::Close),
        proptest::option::of(0u64..8).prop_map(Step::Focus),
        (0u64..8).prop_map(Step::Minimize),
        (0u64..8).prop_map(Step::Restore),
        (0u64..8, 0i32..1200, 0i32..700).prop_map(|(id, x, y)| Step::Move(id, x, y)),
        (0u64..8, 450i32..1600, 400i32..1200).prop_map(|(id, w, h)| Step::Resize(id, w, h)),
    ]
}

fn viewport() -> impl Strategy<Value = Viewport> {
    (320i32..2560, 240i32..1600).prop_map(|(width, height)| Viewport::new(width, height))
}

proptest! {
    /// Arbitrary action sequences never break the registry's structural invariants.
    #[test]
    fn any_action_sequence_keeps_registry_consistent(steps in proptest::collection::vec(step(), 0..40)) {
        let mut registry = WindowRegistry::new(catalog());
        for step in steps {
            reduce_desktop(&mut registry, step.into_action());
            prop_assert_eq!(registry.check_invariants(), Ok(()));
            prop_assert!(registry.len() <= APPS.len());
        }
    }

    /// Repeated opens of one app leave a single window, and that window is active.
    #[test]
    fn reopening_an_app_keeps_one_focused_window(
        prefix in proptest::collection::vec(step(), 0..20),
        index in 0usize..3,
        repeats in 1usize..5,
    ) {
        let mut registry = WindowRegistry::new(catalog());
        for step in prefix {
            reduce_desktop(&mut registry, step.into_action());
        }
        let app_id = app(index);
        for _ in 0..repeats {
            reduce_desktop(&mut registry, DesktopAction::open(app_id.clone()));
        }

        let windows: Vec<WindowId> = registry
            .windows()
            .filter(|record| record.app_id == app_id)
            .map(|record| record.id)
            .collect();
        prop_assert_eq!(windows.len(), 1);
        prop_assert_eq!(registry.active_window(), Some(windows[0]));
        prop_assert!(!registry.is_minimized(windows[0]));
    }

    /// Minimize followed by restore focuses the window again and clears its minimized flag.
    #[test]
    fn minimize_then_restore_round_trips(
        prefix in proptest::collection::vec(step(), 0..20),
        index in 0usize..3,
    ) {
        let mut registry = WindowRegistry::new(catalog());
        for step in prefix {
            reduce_desktop(&mut registry, step.into_action());
        }
        let window_id = open(&mut registry, &app(index));
        let before = registry.window(window_id).map(|record| record.geometry());

        reduce_desktop(&mut registry, DesktopAction::MinimizeWindow { window_id });
        prop_assert!(registry.is_minimized(window_id));
        reduce_desktop(&mut registry, DesktopAction::RestoreWindow { window_id });

        prop_assert_eq!(registry.active_window(), Some(window_id));
        prop_assert!(!registry.is_minimized(window_id));
        prop_assert_eq!(registry.window(window_id).map(|record| record.geometry()), before);
    }

    /// Clamped drag positions stay inside the reachable band, and clamping twice changes nothing.
    #[test]
    fn drag_clamp_is_bounded_and_idempotent(
        x in -5000i32..5000,
        y in -5000i32..5000,
        width in 400i32..1200,
        height in 300i32..900,
        viewport in viewport(),
    ) {
        let config = WindowManagerConfig::default();
        let size = Size::new(width, height);
        let clamped = geometry::clamp_drag(Position::new(x, y), size, viewport, &config);

        prop_assert!(clamped.x >= 0);
        prop_assert!(clamped.y >= 0);
        if viewport.width >= width {
            prop_assert!(clamped.x <= viewport.width - width);
        }
        let max_y = geometry::max_drag_y(viewport, &config);
        if max_y >= 0 {
            prop_assert!(clamped.y <= max_y);
        }
        prop_assert_eq!(geometry::clamp_drag(clamped, size, viewport, &config), clamped);
    }

    /// Every position a drag commits lies inside the drag bounds, however far the pointer goes.
    #[test]
    fn frame_drags_commit_clamped_positions(
        index in 0usize..3,
        moves in proptest::collection::vec((-3000i32..3000, -3000i32..3000), 1..30),
    ) {
        let viewport = Viewport::new(1280, 800);
        let mut registry = WindowRegistry::new(catalog());
        let window_id = open(&mut registry, &app(index));
        let mut frame = frame_for(&registry, window_id);
        let start = registry.window(window_id).expect("open window").position;

        let focus = frame.begin_drag(PointerPosition::new(start.x + 10, start.y + 10));
        commit(&mut registry, focus);
        prop_assert_eq!(frame.state(), FrameState::Dragging);

        for (x, y) in moves {
            let actions = frame.pointer_move(PointerPosition::new(x, y), viewport);
            commit(&mut registry, actions);
            let record = registry.window(window_id).expect("open window");
            prop_assert!(record.position.x >= 0);
            prop_assert!(record.position.x <= viewport.width - record.size.width);
            prop_assert!(record.position.y >= 0);
            prop_assert!(record.position.y <= viewport.height - 80);
            prop_assert_eq!(record.geometry(), frame.geometry());
        }
        prop_assert!(frame.end_gesture());
        prop_assert_eq!(frame.state(), FrameState::Normal);
    }

    /// Resizing never commits a size below the app minimum.
    #[test]
    fn frame_resizes_respect_minimum_size(
        index in 0usize..3,
        moves in proptest::collection::vec((-3000i32..3000, -3000i32..3000), 1..30),
    ) {
        let viewport = Viewport::new(1280, 800);
        let mut registry = WindowRegistry::new(catalog());
        let app_id = app(index);
        let window_id = open(&mut registry, &app_id);
        let min_size = registry.catalog().descriptor(&app_id).expect("catalog app").min_size;
        let mut frame = frame_for(&registry, window_id);

        let focus = frame.begin_resize(PointerPosition::new(600, 500));
        commit(&mut registry, focus);
        prop_assert_eq!(frame.state(), FrameState::Resizing);

        for (x, y) in moves {
            let actions = frame.pointer_move(PointerPosition::new(x, y), viewport);
            commit(&mut registry, actions);
            let size = registry.window(window_id).expect("open window").size;
            prop_assert!(size.width >= min_size.width);
            prop_assert!(size.height >= min_size.height);
        }
        prop_assert_eq!(registry.check_invariants(), Ok(()));
    }

    /// Maximize then restore, with no gesture in between, replays the exact prior geometry.
    #[test]
    fn maximize_then_restore_reproduces_geometry(
        index in 0usize..3,
        x in 0i32..500,
        y in 0i32..300,
        viewport in viewport(),
    ) {
        let mut registry = WindowRegistry::new(catalog());
        let window_id = open(&mut registry, &app(index));
        reduce_desktop(
            &mut registry,
            DesktopAction::UpdateWindowPosition { window_id, position: Position::new(x, y) },
        );
        let before = registry.window(window_id).expect("open window").geometry();
        let mut frame = frame_for(&registry, window_id);

        let maximized = frame.maximize(viewport);
        commit(&mut registry, maximized);
        prop_assert_eq!(frame.state(), FrameState::Maximized);
        let maximized_again = frame.maximize(viewport);
        commit(&mut registry, maximized_again);

        let restored = frame.restore();
        commit(&mut registry, restored);
        prop_assert_eq!(registry.window(window_id).expect("open window").geometry(), before);
        prop_assert_eq!(frame.state(), FrameState::Normal);
    }
}

#[test]
fn terminal_opens_once_and_closes_cleanly() {
    let mut registry = WindowRegistry::new(catalog());
    let terminal = ApplicationId::trusted("terminal");

    reduce_desktop(
        &mut registry,
        DesktopAction::OpenWindow {
            app_id: terminal.clone(),
            props: Value::Null,
        },
    );
    let window_id = registry.window_for_app(&terminal).expect("terminal window");
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.window(window_id).map(|record| record.size),
        Some(Size::new(700, 450))
    );
    assert_eq!(registry.active_window(), Some(window_id));

    reduce_desktop(&mut registry, DesktopAction::open(terminal.clone()));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.active_window(), Some(window_id));

    reduce_desktop(&mut registry, DesktopAction::CloseWindow { window_id });
    assert!(registry.is_empty());
    assert_eq!(registry.active_window(), None);
    assert_eq!(registry.window_for_app(&terminal), None);
}

#[test]
fn maximize_fills_1280_by_800_above_the_taskbar() {
    let viewport = Viewport::new(1280, 800);
    let mut registry = WindowRegistry::new(catalog());
    let window_id = open(&mut registry, &ApplicationId::trusted("about"));
    let before = registry.window(window_id).expect("open window").geometry();
    let mut frame = frame_for(&registry, window_id);

    let actions = frame.maximize(viewport);
    commit(&mut registry, actions);
    let maximized = registry.window(window_id).expect("open window").geometry();
    assert_eq!(maximized.position, Position::new(0, 0));
    assert_eq!(maximized.size, Size::new(1280, 744));

    let actions = frame.restore();
    commit(&mut registry, actions);
    assert_eq!(registry.window(window_id).expect("open window").geometry(), before);
}
