use glam::{DVec2, IVec2};
use proptest::prelude::*;

use super::fixture::{swipe_idle, swipe_left, swipe_right, swipe_swirl};
use super::Fixture;
use crate::motion::Motion;

const SAMPLE_INTERVAL: f64 = 0.008;

fn check_touch_deltas(samples: &[Option<IVec2>]) {
    let mut f = Fixture::new(31.337);

    for (i, &sample) in samples.iter().enumerate() {
        f.tick(SAMPLE_INTERVAL, sample).unwrap();

        let previous = if i == 0 { None } else { samples[i - 1] };
        let (Some(previous), Some(current)) = (previous, sample) else {
            assert_eq!(f.sim.delta_position(), Ok(None));
            continue;
        };

        let expected = (current - previous).as_dvec2();
        assert_eq!(f.sim.delta_position(), Ok(Some(expected)));
        assert_eq!(f.sim.motion(), Ok(Motion::TouchDriven));
        assert_eq!(
            expected.length(),
            f64::from((current - previous).length_squared()).sqrt()
        );
    }
}

#[test]
fn idle_then_touch_motion() {
    for swipe in [swipe_right, swipe_left, swipe_swirl, swipe_idle] {
        check_touch_deltas(&swipe());

        let mut samples = swipe_idle();
        samples.extend(swipe());
        check_touch_deltas(&samples);
    }
}

#[test]
fn first_touch_after_idle() {
    let mut f = Fixture::new(1.);
    f.release(1.);
    f.release(1.);
    f.touch(1., IVec2::new(4, 2));

    assert_eq!(f.sim.motion(), Ok(Motion::Idle));
    assert_eq!(f.sim.velocity(), Ok(None));
    assert_eq!(f.sim.delta_position(), Ok(None));
    assert_eq!(f.sim.last_state().timestamp, None);
    assert_eq!(f.sim.state().timestamp, Some(3.));
}

#[test]
fn touch_velocity() {
    let mut f = Fixture::new(1.);
    f.touch(0.5, IVec2::new(10, 10));
    f.touch(0.5, IVec2::new(12, 9));

    assert_eq!(f.sim.velocity(), Ok(Some(DVec2::new(4., -2.))));
    assert_eq!(f.sim.delta_time(), Ok(0.5));
}

#[test]
fn stationary_touch_has_zero_velocity() {
    let mut f = Fixture::new(1.);
    f.touch(0.1, IVec2::new(7, 7));
    f.touch(0.1, IVec2::new(7, 7));

    assert_eq!(f.sim.velocity(), Ok(Some(DVec2::ZERO)));

    // Lifting a stationary finger doesn't coast.
    f.release(0.1);
    assert!(f.sim.history().is_empty());
    assert_eq!(f.sim.velocity(), Ok(None));
}

proptest! {
    #[test]
    fn touch_deltas_are_exact(
        points in prop::collection::vec((-10_000i32..10_000, -10_000i32..10_000), 2..50),
        delta_time in 0.001f64..1.,
    ) {
        let mut f = Fixture::new(1.);
        let points: Vec<_> = points.into_iter().map(IVec2::from).collect();

        f.touch(delta_time, points[0]);
        for pair in points.windows(2) {
            f.touch(delta_time, pair[1]);

            let expected = (pair[1] - pair[0]).as_dvec2();
            prop_assert_eq!(f.sim.delta_position(), Ok(Some(expected)));

            let velocity = f.sim.velocity().unwrap().unwrap();
            let elapsed = f.sim.delta_time().unwrap();
            prop_assert!((velocity * elapsed - expected).length() < 1e-6);
        }
    }
}
