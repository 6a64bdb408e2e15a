use textrig_animation_core::{
    data::POST_ROLL_FRAMES,
    generate,
    sampling::sample_slot,
    value::{Axis, Channel},
    AnimationPlan, SlotTimeline, StyleParams, StyleTag,
};

fn plan(style: StyleTag, slots: usize, seed: u64) -> AnimationPlan {
    generate(style, slots, &StyleParams::default(), Some(seed))
        .unwrap_or_else(|e| panic!("{style} x{slots}: {e}"))
}

#[test]
fn every_style_produces_a_valid_plan_for_small_texts() {
    for style in StyleTag::ALL {
        for slots in 0..=12 {
            let p = plan(style, slots, 42);
            assert_eq!(p.style, style);
            assert_eq!(p.slot_count as usize, slots);
            assert_eq!(p.timelines.len(), slots);
            if let Err(e) = p.validate() {
                panic!("{style} x{slots}: {e}");
            }
        }
    }
}

#[test]
fn timelines_are_dense_and_non_empty() {
    for style in StyleTag::ALL {
        let p = plan(style, 6, 7);
        for (i, tl) in p.timelines.iter().enumerate() {
            assert_eq!(tl.slot.0 as usize, i);
            assert!(!tl.keys.is_empty(), "{style} slot {i} has no keys");
            assert!(tl.keys.iter().all(|k| k.frame >= 1));
        }
    }
}

#[test]
fn end_frame_is_last_key_plus_post_roll() {
    for style in StyleTag::ALL {
        let p = plan(style, 5, 3);
        let last = p.max_key_frame().unwrap();
        assert_eq!(p.end_frame, last + POST_ROLL_FRAMES, "{style}");
    }
}

#[test]
fn empty_text_ends_after_post_roll_from_start() {
    for style in StyleTag::ALL {
        let p = plan(style, 0, 1);
        assert!(p.timelines.is_empty());
        assert_eq!(p.end_frame, 1 + POST_ROLL_FRAMES);
    }
    let params = StyleParams {
        start_frame: 30,
        ..StyleParams::default()
    };
    let p = generate(StyleTag::Daytona, 0, &params, None).unwrap();
    assert_eq!(p.end_frame, 30 + POST_ROLL_FRAMES);
}

#[test]
fn every_curve_ends_at_rest() {
    for style in StyleTag::ALL {
        let p = plan(style, 8, 11);
        for tl in &p.timelines {
            for channel in Channel::ALL {
                for axis in Axis::ALL {
                    if let Some(v) = tl.last_value(channel, axis) {
                        assert_eq!(
                            v,
                            channel.rest()[axis.index()],
                            "{style} slot {} {channel:?}.{axis:?}",
                            tl.slot.0
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn sampled_pose_at_end_frame_is_rest() {
    for style in StyleTag::ALL {
        let p = plan(style, 4, 5);
        for tl in &p.timelines {
            let pose = sample_slot(tl, p.end_frame as f32);
            assert!(pose.is_rest(1e-6), "{style} slot {}: {pose:?}", tl.slot.0);
        }
    }
}

#[test]
fn later_slots_start_no_earlier_than_earlier_slots() {
    for style in StyleTag::ALL {
        let p = plan(style, 6, 9);
        let firsts: Vec<u32> = p
            .timelines
            .iter()
            .map(|t| t.keys.iter().map(|k| k.frame).min().unwrap())
            .collect();
        assert!(firsts.windows(2).all(|w| w[0] <= w[1]), "{style}: {firsts:?}");
    }
}

#[test]
fn start_frame_shifts_the_whole_plan() {
    let early = plan(StyleTag::ElasticWave, 3, 0);
    let params = StyleParams {
        start_frame: 101,
        ..StyleParams::default()
    };
    let late = generate(StyleTag::ElasticWave, 3, &params, None).unwrap();
    assert_eq!(late.end_frame, early.end_frame + 100);
    for (a, b) in early.timelines.iter().zip(&late.timelines) {
        assert_eq!(a.keys.len(), b.keys.len());
        for (ka, kb) in a.keys.iter().zip(&b.keys) {
            assert_eq!(ka.frame + 100, kb.frame);
            assert_eq!(ka.value, kb.value);
        }
    }
}

/// (frame - offset, value) for one curve, keeping keys up to `offset + until`.
fn shifted(
    tl: &SlotTimeline,
    channel: Channel,
    axis: Axis,
    offset: u32,
    until: u32,
) -> Vec<(u32, f32)> {
    tl.samples(channel, axis)
        .filter(|(f, _)| *f <= offset + until)
        .map(|(f, v)| (f - offset, v))
        .collect()
}

fn assert_slots_repeat_slot_zero(
    style: StyleTag,
    slots: usize,
    offset: impl Fn(u32, Channel) -> u32,
    until: u32,
) {
    let p = plan(style, slots, 13);
    let first = &p.timelines[0];
    for tl in &p.timelines[1..] {
        let k = tl.slot.0;
        for channel in Channel::ALL {
            for axis in Axis::ALL {
                let mut expected = shifted(first, channel, axis, 0, until);
                if style == StyleTag::Tumble3d && channel == Channel::Rotation && axis == Axis::Y && k % 2 == 1 {
                    expected.iter_mut().for_each(|(_, v)| *v = -*v);
                }
                assert_eq!(
                    shifted(tl, channel, axis, offset(k, channel), until),
                    expected,
                    "{style} slot {k} {channel:?}.{axis:?}"
                );
            }
        }
    }
}

#[test]
fn staggered_styles_repeat_slot_zero_shifted_in_time() {
    let d = StyleParams::default();

    let stagger = d.elastic_wave.stagger;
    assert_slots_repeat_slot_zero(StyleTag::ElasticWave, 6, |k, _| k * stagger, u32::MAX / 2);

    // Odd slots mirror the yaw direction of the tumble.
    let stagger = d.tumble.stagger;
    assert_slots_repeat_slot_zero(StyleTag::Tumble3d, 5, |k, _| k * stagger, u32::MAX / 2);

    let (pop, snap) = (d.daytona.pop_in_stagger, d.daytona.snap_stagger);
    assert_slots_repeat_slot_zero(
        StyleTag::Daytona,
        5,
        |k, channel| if channel == Channel::Rotation { k * snap } else { k * pop },
        u32::MAX / 2,
    );
}

#[test]
fn phases_before_a_shared_base_repeat_slot_zero_shifted_in_time() {
    let d = StyleParams::default();

    // Drop and bounce, up to slot 0's bounce end.
    let b = &d.bad_game_over;
    let stagger = b.drop_stagger;
    assert_slots_repeat_slot_zero(
        StyleTag::BadGameOver,
        4,
        |k, _| k * stagger,
        d.start_frame + b.drop_duration + b.bounce_duration,
    );

    // Rise and spiral, up to slot 0's spiral end.
    let g = &d.good_game_over;
    let stagger = g.rise_stagger;
    assert_slots_repeat_slot_zero(
        StyleTag::GoodGameOver,
        4,
        |k, _| k * stagger,
        d.start_frame + g.rise_duration + g.spiral_duration,
    );

    // Pop-in and approach, up to slot 0's arrival. The last slot is left out:
    // its jump starts on its own arrival frame.
    let c = &d.circular_approach;
    let stagger = c.approach_duration / 2;
    let p = plan(StyleTag::CircularApproach, 4, 13);
    let arrival = d.start_frame + 1 + c.approach_duration;
    for k in 1..3 {
        let tl = &p.timelines[k as usize];
        for channel in Channel::ALL {
            for axis in Axis::ALL {
                assert_eq!(
                    shifted(tl, channel, axis, k * stagger, arrival),
                    shifted(&p.timelines[0], channel, axis, 0, arrival),
                    "slot {k} {channel:?}.{axis:?}"
                );
            }
        }
    }
}
