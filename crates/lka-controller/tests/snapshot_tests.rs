//! Snapshot tests for representative frames.

use insta::assert_snapshot;
use lka_controller::prelude::*;
use lka_test_helpers::prelude::*;

#[test]
fn test_snapshot_first_engaged_frame() {
    let mut controller = mqb_controller();
    let input = FrameInputBuilder::engaged(1.0).lanes(true, true).buttons(0x2);
    let commands = controller.update(&input.build());
    assert_snapshot!(
        format!("{:?}", commands),
        @"[CommandRecord { stream: Steering, sequence: 0, payload: Steering { torque: 8, enabled: true } }, CommandRecord { stream: Hud, sequence: 0, payload: Hud { enabled: true, alert: None, left_lane: true, right_lane: true } }, CommandRecord { stream: Buttons, sequence: 0, payload: Buttons { code: ButtonCode(2) } }]"
    );
}

#[test]
fn test_snapshot_takeover_request() {
    let mut controller = mqb_controller();
    run_constant(&mut controller, FrameInputBuilder::engaged(0.5), 10);
    let input = FrameInputBuilder::engaged(0.5)
        .alerts(VisualAlert::SteerRequired, AudibleAlert::ChimeWarning1)
        .lanes(true, false);
    let commands = controller.update(&input.build());
    assert_snapshot!(
        format!("{:?}", commands),
        @"[CommandRecord { stream: Steering, sequence: 10, payload: Steering { torque: 88, enabled: true } }, CommandRecord { stream: Hud, sequence: 1, payload: Hud { enabled: true, alert: Warning, left_lane: true, right_lane: false } }]"
    );
}

#[test]
fn test_snapshot_steering_only_frame() {
    let mut controller = mqb_controller();
    run_constant(&mut controller, FrameInputBuilder::new(), 1);
    let commands = controller.update(&FrameInputBuilder::new().build());
    assert_snapshot!(
        format!("{:?}", commands),
        @"[CommandRecord { stream: Steering, sequence: 1, payload: Steering { torque: 0, enabled: false } }]"
    );
}

#[test]
fn test_snapshot_config_json() {
    let controller = mqb_controller();
    let json = must(controller.config().to_json_string());
    assert_snapshot!(json, @r#"
    {
      "fingerprint": "VOLKSWAGEN GOLF",
      "steering_active": 1,
      "steering_inactive": 10,
      "hud": 10,
      "buttons": 3,
      "limits": {
        "max_magnitude": 300,
        "max_increase_per_frame": 8,
        "max_decrease_per_frame": 8,
        "driver_override_threshold": 100,
        "driver_override_weight": 4
      },
      "buses": {
        "gateway": 0,
        "extended": 1
      },
      "loop_rate_hz": 100
    }
    "#);
}
