use textrig_animation_core::{
    binding::{KeyframeSink, RecordingSink},
    data::Keyframe,
    generate,
    sampling::{sample_curve, sample_slot},
    value::{Axis, Channel},
    SlotId, StyleParams, StyleTag,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[derive(Default)]
struct CountingSink {
    per_bone: Vec<(String, usize)>,
    end: Option<u32>,
}

impl KeyframeSink for CountingSink {
    fn key(&mut self, bone: &str, slot: SlotId, _key: &Keyframe) {
        assert_eq!(bone, slot.bone_name());
        match self.per_bone.last_mut() {
            Some((b, n)) if b == bone => *n += 1,
            _ => self.per_bone.push((bone.to_string(), 1)),
        }
    }

    fn end_frame(&mut self, frame: u32) {
        self.end = Some(frame);
    }
}

#[test]
fn apply_streams_every_key_slot_by_slot() {
    let plan = generate(StyleTag::Daytona, 4, &StyleParams::default(), None).unwrap();
    let mut sink = CountingSink::default();
    let delivered = plan.apply(&mut sink);

    let total: usize = plan.timelines.iter().map(|t| t.keys.len()).sum();
    assert_eq!(delivered, total);
    let bones: Vec<&str> = sink.per_bone.iter().map(|(b, _)| b.as_str()).collect();
    assert_eq!(bones, vec!["Bone_0", "Bone_1", "Bone_2", "Bone_3"]);
    for (tl, (_, n)) in plan.timelines.iter().zip(&sink.per_bone) {
        assert_eq!(tl.keys.len(), *n);
    }
    assert_eq!(sink.end, Some(plan.end_frame));
}

#[test]
fn recording_sink_preserves_emission_order() {
    let plan = generate(StyleTag::ElasticWave, 2, &StyleParams::default(), None).unwrap();
    let mut sink = RecordingSink::default();
    plan.apply(&mut sink);
    let expected: Vec<&Keyframe> = plan.timelines.iter().flat_map(|t| &t.keys).collect();
    assert_eq!(sink.keys.len(), expected.len());
    for ((_, got), want) in sink.keys.iter().zip(expected) {
        assert_eq!(got, want);
    }
    assert_eq!(sink.keys[0].0, "Bone_0");
}

#[test]
fn sampling_follows_keys_and_holds_before_first() {
    let plan = generate(StyleTag::ElasticWave, 1, &StyleParams::default(), None).unwrap();
    let tl = &plan.timelines[0];
    // Before the first key the first value holds.
    assert_eq!(sample_slot(tl, 0.0).scale, [0.0; 3]);
    // On a key the sample is the key value.
    approx(sample_curve(tl, Channel::Scale, Axis::Z, 11.0), 2.0, 1e-6);
    approx(sample_curve(tl, Channel::Translation, Axis::Z, 11.0), 1.0, 1e-6);
    // Halfway through the stretch -> squash segment with a symmetric ease.
    approx(sample_curve(tl, Channel::Scale, Axis::Z, 16.0), 1.25, 1e-2);
    // Unkeyed channels sit at rest.
    assert_eq!(sample_slot(tl, 20.0).rotation, [0.0; 3]);
}

#[test]
fn sampling_between_pin_keys_holds_final_value() {
    let plan = generate(StyleTag::BadGameOver, 1, &StyleParams::default(), None).unwrap();
    let tl = &plan.timelines[0];
    // Linear hold from the end of the fall to the rest pin one frame later.
    approx(sample_curve(tl, Channel::Translation, Axis::Z, 131.0), -10.0, 1e-6);
    approx(sample_curve(tl, Channel::Translation, Axis::Z, 131.5), -5.0, 1e-4);
    assert!(sample_slot(tl, 132.0).is_rest(1e-6));
}
