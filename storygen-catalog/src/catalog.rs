//! Embedded Bermuda Sector story drafts, baked into the binary at compile
//! time via `include_str!`.
//!
//! | Epic | Directory                                                   |
//! |------|-------------------------------------------------------------|
//! | 1    | `docs/stories/epic-1-crash-survivor-foundation/`            |
//! | 2    | `docs/stories/epic-2-threat-escalation-and-room-depth/`     |
//! | 3    | `docs/stories/epic-3-equipment-matrix-and-progression/`     |
//! | 4    | `docs/stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/` |

use storygen_core::{DocumentSet, DocumentSetError};

/// Output path and payload of every story, in epic/story order.
pub const STORIES: &[(&str, &str)] = &[
    (
        "docs/stories/epic-1-crash-survivor-foundation/1.1-godot-project-spine-and-dice-loop-skeleton.md",
        include_str!("../stories/epic-1-crash-survivor-foundation/1.1-godot-project-spine-and-dice-loop-skeleton.md"),
    ),
    (
        "docs/stories/epic-1-crash-survivor-foundation/1.2-core-resources-and-hud-feedback.md",
        include_str!("../stories/epic-1-crash-survivor-foundation/1.2-core-resources-and-hud-feedback.md"),
    ),
    (
        "docs/stories/epic-1-crash-survivor-foundation/1.3-prototype-room-queue-and-exploration-actions.md",
        include_str!("../stories/epic-1-crash-survivor-foundation/1.3-prototype-room-queue-and-exploration-actions.md"),
    ),
    (
        "docs/stories/epic-1-crash-survivor-foundation/1.4-first-threat-encounter-and-escape-resolution.md",
        include_str!("../stories/epic-1-crash-survivor-foundation/1.4-first-threat-encounter-and-escape-resolution.md"),
    ),
    (
        "docs/stories/epic-2-threat-escalation-and-room-depth/2.1-advanced-room-decks-and-events.md",
        include_str!("../stories/epic-2-threat-escalation-and-room-depth/2.1-advanced-room-decks-and-events.md"),
    ),
    (
        "docs/stories/epic-2-threat-escalation-and-room-depth/2.2-threat-timer-variants-and-status-effects.md",
        include_str!("../stories/epic-2-threat-escalation-and-room-depth/2.2-threat-timer-variants-and-status-effects.md"),
    ),
    (
        "docs/stories/epic-2-threat-escalation-and-room-depth/2.3-clue-milestones-and-mini-objectives.md",
        include_str!("../stories/epic-2-threat-escalation-and-room-depth/2.3-clue-milestones-and-mini-objectives.md"),
    ),
    (
        "docs/stories/epic-2-threat-escalation-and-room-depth/2.4-push-your-luck-time-mechanics.md",
        include_str!("../stories/epic-2-threat-escalation-and-room-depth/2.4-push-your-luck-time-mechanics.md"),
    ),
    (
        "docs/stories/epic-3-equipment-matrix-and-progression/3.1-equipment-matrix-ui-and-constraints.md",
        include_str!("../stories/epic-3-equipment-matrix-and-progression/3.1-equipment-matrix-ui-and-constraints.md"),
    ),
    (
        "docs/stories/epic-3-equipment-matrix-and-progression/3.2-loot-generation-and-gear-effects.md",
        include_str!("../stories/epic-3-equipment-matrix-and-progression/3.2-loot-generation-and-gear-effects.md"),
    ),
    (
        "docs/stories/epic-3-equipment-matrix-and-progression/3.3-experience-and-level-up-choices.md",
        include_str!("../stories/epic-3-equipment-matrix-and-progression/3.3-experience-and-level-up-choices.md"),
    ),
    (
        "docs/stories/epic-3-equipment-matrix-and-progression/3.4-meta-progression-and-unlocks.md",
        include_str!("../stories/epic-3-equipment-matrix-and-progression/3.4-meta-progression-and-unlocks.md"),
    ),
    (
        "docs/stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/4.1-visual-and-audio-atmosphere-pass.md",
        include_str!("../stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/4.1-visual-and-audio-atmosphere-pass.md"),
    ),
    (
        "docs/stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/4.2-onboarding-and-tutorials.md",
        include_str!("../stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/4.2-onboarding-and-tutorials.md"),
    ),
    (
        "docs/stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/4.3-accessibility-and-ux-refinements.md",
        include_str!("../stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/4.3-accessibility-and-ux-refinements.md"),
    ),
    (
        "docs/stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/4.4-analytics-and-live-ops-foundations.md",
        include_str!("../stories/epic-4-atmosphere-ux-polish-and-live-ops-hooks/4.4-analytics-and-live-ops-foundations.md"),
    ),
];

/// Build a fresh [`DocumentSet`] from [`STORIES`].
pub fn story_set() -> Result<DocumentSet, DocumentSetError> {
    DocumentSet::from_entries(STORIES.iter().copied())
}
