use lamina::{
    DelegateId, GradientLayer, InputDispatchers, LayerNode, MultiplexLayer, Rgba8, Size,
    SolidLayer, Stage,
};

#[derive(Debug, PartialEq, Eq, Clone)]
enum Event {
    TouchAdd(DelegateId, i32),
    TouchRemove(DelegateId),
    AccelSet(Option<DelegateId>),
    KeypadAdd(DelegateId),
    KeypadRemove(DelegateId),
}

#[derive(Default)]
struct Log {
    events: Vec<Event>,
}

impl InputDispatchers for Log {
    fn add_standard_touch_delegate(&mut self, id: DelegateId, priority: i32) {
        self.events.push(Event::TouchAdd(id, priority));
    }

    fn add_targeted_touch_delegate(&mut self, id: DelegateId, priority: i32, _swallows: bool) {
        self.events.push(Event::TouchAdd(id, priority));
    }

    fn remove_touch_delegate(&mut self, id: DelegateId) {
        self.events.push(Event::TouchRemove(id));
    }

    fn set_accelerometer_delegate(&mut self, id: Option<DelegateId>) {
        self.events.push(Event::AccelSet(id));
    }

    fn add_keypad_delegate(&mut self, id: DelegateId) {
        self.events.push(Event::KeypadAdd(id));
    }

    fn remove_keypad_delegate(&mut self, id: DelegateId) {
        self.events.push(Event::KeypadRemove(id));
    }
}

fn stage() -> Stage {
    Stage::new(Size::new(320.0, 480.0), 1.0).unwrap()
}

#[test]
fn multiplexed_layers_register_and_release_input_across_switches() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let stage = stage();
    let mut log = Log::default();

    let mut menu = SolidLayer::with_color(&stage, Rgba8::new(200, 0, 0, 255)).unwrap();
    menu.layer_mut().set_touch_enabled(true, &mut log);
    let menu_id = menu.layer().delegate_id();

    let mut game = GradientLayer::with_colors(
        &stage,
        Rgba8::new(0, 0, 0, 255),
        Rgba8::new(0, 0, 80, 255),
    )
    .unwrap();
    game.layer_mut().set_keypad_enabled(true, &mut log);
    let game_id = game.layer().delegate_id();

    // Nothing registers while the graph is not running.
    assert!(log.events.is_empty());

    let mut mux = MultiplexLayer::with_children(
        &stage,
        vec![Box::new(menu) as Box<dyn LayerNode>, Box::new(game)],
    )
    .unwrap();

    mux.on_enter(&mut log);
    assert_eq!(log.events, vec![Event::TouchAdd(menu_id, 0)]);

    log.events.clear();
    mux.switch_to(1, &mut log);
    assert_eq!(
        log.events,
        vec![Event::TouchRemove(menu_id), Event::KeypadAdd(game_id)]
    );

    log.events.clear();
    mux.switch_to(0, &mut log);
    assert_eq!(
        log.events,
        vec![Event::KeypadRemove(game_id), Event::TouchAdd(menu_id, 0)]
    );

    log.events.clear();
    mux.on_exit(&mut log);
    assert_eq!(log.events, vec![Event::TouchRemove(menu_id)]);

    // Re-entering restores exactly the registrations exit dropped.
    log.events.clear();
    mux.on_enter(&mut log);
    assert_eq!(log.events, vec![Event::TouchAdd(menu_id, 0)]);
}

#[test]
fn transition_finish_reasserts_accelerometer_through_the_multiplexer() {
    let stage = stage();
    let mut log = Log::default();

    let mut hud = SolidLayer::with_color(&stage, Rgba8::new(0, 0, 0, 128)).unwrap();
    hud.layer_mut().set_accelerometer_enabled(true, &mut log);
    let hud_id = hud.layer().delegate_id();

    let mut mux = MultiplexLayer::with_child(&stage, Box::new(hud)).unwrap();
    mux.on_enter(&mut log);
    mux.on_enter_transition_did_finish(&mut log);

    assert_eq!(
        log.events,
        vec![Event::AccelSet(Some(hud_id)), Event::AccelSet(Some(hud_id))]
    );
}

#[test]
fn released_children_stay_released_across_further_switches() {
    let stage = stage();
    let mut log = Log::default();

    let a = SolidLayer::with_color(&stage, Rgba8::new(1, 0, 0, 255)).unwrap();
    let b = SolidLayer::with_color(&stage, Rgba8::new(0, 1, 0, 255)).unwrap();
    let c = SolidLayer::with_color(&stage, Rgba8::new(0, 0, 1, 255)).unwrap();

    let mut mux = MultiplexLayer::with_children(
        &stage,
        vec![Box::new(a) as Box<dyn LayerNode>, Box::new(b), Box::new(c)],
    )
    .unwrap();
    mux.on_enter(&mut log);

    mux.switch_to_and_release(1, &mut log);
    mux.switch_to(2, &mut log);
    assert_eq!(mux.active_index(), 2);

    let hit = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        mux.switch_to(0, &mut log);
    }));
    assert!(hit.is_err());
    assert_eq!(mux.active_index(), 2);
}
