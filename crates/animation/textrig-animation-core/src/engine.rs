//! Generator: validates a request, runs every slot's phases and assembles the plan.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::{AnimationPlan, SlotTimeline, POST_ROLL_FRAMES};
use crate::error::{GenerateError, Result};
use crate::ids::SlotId;
use crate::params::StyleParams;
use crate::rng::{entropy_seed, SlotRng};
use crate::style::StyleTag;
use crate::styles::compose;
use crate::timeline::TimelineBuilder;

/// Upper bound on letter slots per plan.
pub const MAX_SLOTS: usize = 10_000;

/// Loosely-typed generation request, as received from hosts over JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub style: String,
    pub slot_count: i64,
    #[serde(default)]
    pub params: StyleParams,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Parse a [`GenerateRequest`] from JSON text.
pub fn parse_request_json(s: &str) -> Result<GenerateRequest> {
    serde_json::from_str(s).map_err(|e| GenerateError::param("request", format!("parse error: {e}")))
}

#[derive(Clone, Debug, Default)]
pub struct Generator {
    cfg: Config,
}

impl Generator {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Produce the keyframe plan for `slot_count` letters animated in `style`.
    ///
    /// All parameter checks run before any slot is generated. `seed` only
    /// matters for randomized styles; without one a fresh entropy seed is used
    /// unless [`Config::require_seed`] is set.
    pub fn generate(
        &self,
        style: StyleTag,
        slot_count: usize,
        params: &StyleParams,
        seed: Option<u64>,
    ) -> Result<AnimationPlan> {
        if slot_count > MAX_SLOTS {
            return Err(GenerateError::param(
                "slot_count",
                format!("at most {MAX_SLOTS} slots are supported, got {slot_count}"),
            ));
        }
        params.validate(style)?;
        let seed = match seed {
            Some(seed) => seed,
            None if style.is_randomized() && self.cfg.require_seed => {
                return Err(GenerateError::SeedRequired { style });
            }
            None if style.is_randomized() => entropy_seed(),
            None => 0,
        };

        let slot_count = slot_count as u32;
        let timelines = (0..slot_count)
            .map(|i| generate_slot(style, SlotId(i), slot_count, params, seed))
            .collect::<Result<Vec<_>>>()?;

        let last = timelines
            .iter()
            .filter_map(SlotTimeline::max_frame)
            .max()
            .unwrap_or(params.start_frame);
        let end_frame = last + POST_ROLL_FRAMES;
        if let Some(budget) = self.cfg.frame_budget {
            if end_frame > budget {
                log::warn!(
                    "{style} plan for {slot_count} slots ends at frame {end_frame}, past the budget of {budget}"
                );
            }
        }
        log::debug!(
            "generated {style} plan: {slot_count} slots, {} keys, end frame {end_frame}",
            timelines.iter().map(|t| t.keys.len()).sum::<usize>()
        );

        Ok(AnimationPlan {
            style,
            slot_count,
            timelines,
            end_frame,
        })
    }

    /// Validate and run a loosely-typed request.
    pub fn generate_request(&self, req: &GenerateRequest) -> Result<AnimationPlan> {
        let style: StyleTag = req.style.parse()?;
        if req.slot_count < 0 {
            return Err(GenerateError::param(
                "slot_count",
                format!("must be >= 0, got {}", req.slot_count),
            ));
        }
        let slot_count = usize::try_from(req.slot_count)
            .map_err(|_| GenerateError::param("slot_count", "does not fit in usize"))?;
        self.generate(style, slot_count, &req.params, req.seed)
    }
}

/// Generate one slot's timeline. Slots share nothing but read-only params, so
/// this may run for slots in any order.
pub fn generate_slot(
    style: StyleTag,
    slot: SlotId,
    slot_count: u32,
    params: &StyleParams,
    seed: u64,
) -> Result<SlotTimeline> {
    let mut rng = SlotRng::for_slot(seed, slot);
    let mut tl = TimelineBuilder::new(slot);
    for phase in compose(style, slot, slot_count, params, &mut rng) {
        phase.run(&mut tl, &mut rng)?;
    }
    Ok(tl.finish())
}

/// Generate with the default [`Config`].
pub fn generate(
    style: StyleTag,
    slot_count: usize,
    params: &StyleParams,
    seed: Option<u64>,
) -> Result<AnimationPlan> {
    Generator::default().generate(style, slot_count, params, seed)
}
