use std::cell::RefCell;
use std::rc::Rc;

use dice_tray_engine::api::host::{BodyPose, MeshId, TrayScene};
use dice_tray_engine::core::{ManualClock, TrayError};
use dice_tray_engine::domain::style::{BodyDesc, StyleSheet};
use dice_tray_engine::systems::gate::GateDecision;
use dice_tray_engine::{DieKind, TrayConfig, TrayCore};

#[derive(Default)]
struct Counts {
    spawned: usize,
    disposed: usize,
    renders: usize,
}

struct CountingScene(Rc<RefCell<Counts>>);

impl TrayScene for CountingScene {
    fn is_live(&self) -> bool {
        true
    }

    fn spawn_mesh(&mut self, _kind: DieKind, _desc: &BodyDesc) -> Result<MeshId, TrayError> {
        let mut c = self.0.borrow_mut();
        c.spawned += 1;
        Ok(MeshId(c.spawned as u32))
    }

    fn dispose_mesh(&mut self, _mesh: MeshId) {
        self.0.borrow_mut().disposed += 1;
    }

    fn render(&mut self, _poses: &[BodyPose]) {
        self.0.borrow_mut().renders += 1;
    }
}

fn tray(seed: u64) -> (TrayCore, ManualClock, Rc<RefCell<Counts>>) {
    let clock = ManualClock::new(0.0);
    let config = TrayConfig {
        seed: Some(seed),
        ..TrayConfig::default()
    };
    let mut core = TrayCore::with_clock(config, Box::new(clock.clone())).unwrap();
    let counts = Rc::new(RefCell::new(Counts::default()));
    core.mount(Box::new(CountingScene(counts.clone())));
    (core, clock, counts)
}

#[test]
fn a_handful_of_dice_settle_and_the_loop_goes_idle() {
    let (mut core, clock, counts) = tray(42);
    let style = StyleSheet::standard("standard");
    core.set_open(true);
    for kind in [DieKind::D4, DieKind::D8, DieKind::D20] {
        core.add_die(&style, kind).unwrap();
    }

    let mut idle_at = None;
    for frame in 0..3000 {
        clock.advance(16.0);
        if core.frame() == GateDecision::SkipIdle {
            idle_at = Some(frame);
            break;
        }
    }
    assert!(idle_at.is_some(), "dice never settled");
    assert_eq!(core.awake_count(), 0);
    assert!(core.dice().iter().all(|d| d.is_asleep()));

    // Every body came to rest inside the tray.
    let bounds = dice_tray_engine::systems::environment::TrayBounds::from_dimensions(
        &core.config().dimensions,
    );
    for die in core.dice() {
        for part in die.bodies() {
            let body = core.body(part.body).unwrap();
            assert!(bounds.contains_sphere(body.pos, body.radius));
        }
    }

    let renders = counts.borrow().renders;
    for _ in 0..60 {
        clock.advance(16.0);
        core.frame();
    }
    assert_eq!(counts.borrow().renders, renders);
}

#[test]
fn roll_clear_roll_keeps_scene_balanced() {
    let (mut core, clock, counts) = tray(7);
    let style = StyleSheet::standard("standard");
    core.set_open(true);

    for _ in 0..3 {
        core.add_die(&style, DieKind::D100).unwrap();
        core.add_die(&style, DieKind::D6).unwrap();
        for _ in 0..10 {
            clock.advance(16.0);
            core.frame();
        }
        core.clear_all();
    }

    let c = counts.borrow();
    assert_eq!(c.spawned, 9);
    assert_eq!(c.disposed, 9);
    assert_eq!(core.body_count(), 0);
    assert_eq!(core.shadow_caster_count(), 0);
}

#[test]
fn config_round_trips_through_json() {
    let json = r#"{ "settle": { "sleep_delay_ms": 250 }, "seed": 9 }"#;
    let config = TrayConfig::from_json(json).unwrap();
    assert_eq!(config.settle.sleep_delay_ms, 250.0);
    assert_eq!(config.settle.low_threshold, 0.01);
    assert_eq!(config.seed, Some(9));

    let core = TrayCore::new(config.clone()).unwrap();
    assert_eq!(core.config(), &config);
}

#[test]
fn unknown_kind_name_is_a_config_error() {
    let err = "d7".parse::<DieKind>().unwrap_err();
    assert_eq!(err, TrayError::UnknownKind("d7".to_string()));
}
