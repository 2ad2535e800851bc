use super::*;

const ALL: &[&str] = &[
    "linear",
    "easeinquad",
    "easeoutquad",
    "easeinoutquad",
    "easeincubic",
    "easeoutcubic",
    "easeinoutcubic",
    "easeinquart",
    "easeoutquart",
    "easeinoutquart",
    "easeinquint",
    "easeoutquint",
    "easeinoutquint",
    "easeinsine",
    "easeoutsine",
    "easeinoutsine",
    "easeinexpo",
    "easeoutexpo",
    "easeinoutexpo",
    "easeincirc",
    "easeoutcirc",
    "easeinoutcirc",
];

#[test]
fn linear_matches_closed_form() {
    let t = Tween::Linear;
    assert_eq!(t.sample(1.0, 0.0, 1.0, 4.0), 0.25);
    assert_eq!(t.sample(2.0, 0.0, 1.0, 4.0), 0.5);
    assert_eq!(t.sample(3.0, 10.0, -4.0, 4.0), 7.0);
}

#[test]
fn named_curves_hit_both_endpoints_exactly() {
    for name in ALL {
        let t = Tween::parse(name).unwrap();
        assert_eq!(t.sample(0.0, 0.0, 1.0, 50.0), 0.0, "{name} start");
        assert_eq!(t.sample(50.0, 0.0, 1.0, 50.0), 1.0, "{name} end");
        assert_eq!(t.sample(60.0, 0.0, 1.0, 50.0), 1.0, "{name} past end");
    }
}

#[test]
fn named_curves_stay_near_unit_range() {
    for name in ALL {
        let t = Tween::parse(name).unwrap();
        for i in 0..=40 {
            let v = t.sample(f64::from(i), 0.0, 1.0, 40.0);
            assert!(v.is_finite(), "{name} at {i}");
            assert!((-1e-9..=1.0 + 1e-9).contains(&v), "{name} at {i}: {v}");
        }
    }
}

#[test]
fn in_out_curves_are_symmetric_at_midpoint() {
    for name in ["easeinoutquad", "easeinoutcubic", "easeinoutsine", "easeinoutcirc"] {
        let v = Tween::parse(name).unwrap().sample(5.0, 0.0, 1.0, 10.0);
        assert!((v - 0.5).abs() < 1e-12, "{name}: {v}");
    }
}

#[test]
fn zero_total_jumps_to_target() {
    assert_eq!(Tween::InQuad.sample(0.0, 2.0, 3.0, 0.0), 5.0);
}

#[test]
fn parse_accepts_separators_and_missing_prefix() {
    assert_eq!(Tween::parse("EaseInOutSine").unwrap().name(), Some("easeinoutsine"));
    assert_eq!(Tween::parse("ease_in_quad").unwrap().name(), Some("easeinquad"));
    assert_eq!(Tween::parse("out-expo").unwrap().name(), Some("easeoutexpo"));
    assert!(Tween::parse("").is_err());
    assert!(Tween::parse("bounce").is_err());
}

#[test]
fn every_name_round_trips() {
    for name in ALL {
        assert_eq!(Tween::parse(name).unwrap().name(), Some(*name));
    }
}

#[test]
fn custom_is_called_verbatim() {
    let t = Tween::custom(|t, b, c, d| b + c * (t / d) * 2.0);
    assert_eq!(t.sample(4.0, 0.0, 1.0, 4.0), 2.0);
    // Out-of-range inputs are not clamped for custom functions.
    assert_eq!(t.sample(-2.0, 0.0, 1.0, 4.0), -1.0);
    assert_eq!(t.sample(8.0, 0.0, 1.0, 4.0), 4.0);
    let zero_total = Tween::custom(|_, _, _, d| d - 1.0);
    assert_eq!(zero_total.sample(1.0, 0.0, 1.0, 0.0), -1.0);
    assert!(t.name().is_none());
    assert_eq!(format!("{t:?}"), "Tween(custom)");
}

#[test]
fn serde_uses_names_and_rejects_custom() {
    let s = serde_json::to_string(&Tween::OutCubic).unwrap();
    assert_eq!(s, "\"easeoutcubic\"");
    let t: Tween = serde_json::from_str("\"ease_in_sine\"").unwrap();
    assert_eq!(t.name(), Some("easeinsine"));
    assert!(serde_json::from_str::<Tween>("\"wobble\"").is_err());
    assert!(serde_json::to_string(&Tween::custom(|_, b, _, _| b)).is_err());
}
