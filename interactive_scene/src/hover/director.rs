//! Animation director: maps lifecycle states to clip sets by name suffix.

use std::time::Duration;

use tracing::warn;

use super::lifecycle::LifecycleState;

/// Cross-fade used when starting a cue, short enough to only hide the pop.
pub const CROSS_FADE_IN: Duration = Duration::from_millis(5);

/// Named animation intent associated with a lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationCue {
    Idle,
    HoverEntry,
    HoverIdle,
    HoverExit,
}

impl AnimationCue {
    pub const ALL: [AnimationCue; 4] = [
        AnimationCue::Idle,
        AnimationCue::HoverEntry,
        AnimationCue::HoverIdle,
        AnimationCue::HoverExit,
    ];

    pub fn for_state(state: LifecycleState) -> Self {
        match state {
            LifecycleState::Idle => AnimationCue::Idle,
            LifecycleState::Entering => AnimationCue::HoverEntry,
            LifecycleState::Steady => AnimationCue::HoverIdle,
            LifecycleState::Exiting => AnimationCue::HoverExit,
        }
    }

    /// Resting cues loop; transitional cues play once and hold their last frame.
    pub fn looping(self) -> bool {
        matches!(self, AnimationCue::Idle | AnimationCue::HoverIdle)
    }
}

/// Clip-name suffix for each cue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CueTable {
    pub idle: String,
    pub hover_entry: String,
    pub hover_idle: String,
    pub hover_exit: String,
}

impl Default for CueTable {
    fn default() -> Self {
        Self {
            idle: "Idle".to_string(),
            hover_entry: "HoverEntry".to_string(),
            hover_idle: "HoverIdle".to_string(),
            hover_exit: "HoverExit".to_string(),
        }
    }
}

impl CueTable {
    /// Hyphenated clip names (`Hover-entry`, `Hover-idle`, `Hover-exit`) as
    /// exported in the built-in catalogue's models.
    pub fn hyphenated() -> Self {
        Self {
            idle: "Idle".to_string(),
            hover_entry: "Hover-entry".to_string(),
            hover_idle: "Hover-idle".to_string(),
            hover_exit: "Hover-exit".to_string(),
        }
    }

    pub fn suffix(&self, cue: AnimationCue) -> &str {
        match cue {
            AnimationCue::Idle => &self.idle,
            AnimationCue::HoverEntry => &self.hover_entry,
            AnimationCue::HoverIdle => &self.hover_idle,
            AnimationCue::HoverExit => &self.hover_exit,
        }
    }

    /// The cue whose suffix is the longest one `clip_name` ends with.
    /// `"Screen.HoverIdle"` belongs to `HoverIdle`, not `Idle`.
    pub fn classify(&self, clip_name: &str) -> Option<AnimationCue> {
        AnimationCue::ALL
            .into_iter()
            .filter(|&cue| {
                let suffix = self.suffix(cue);
                !suffix.is_empty() && clip_name.ends_with(suffix)
            })
            .fold(None, |best: Option<AnimationCue>, cue| match best {
                Some(b) if self.suffix(b).len() >= self.suffix(cue).len() => Some(b),
                _ => Some(cue),
            })
    }
}

/// Index into the clip list the object was constructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipId(pub usize);

/// Playback request: stop everything, then start `clips`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CuePlan {
    pub cue: AnimationCue,
    pub clips: Vec<ClipId>,
    pub fade_in: Duration,
    pub looping: bool,
}

impl CuePlan {
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

#[derive(Debug)]
pub struct AnimationDirector {
    assignments: Vec<Option<AnimationCue>>,
    playing: Vec<ClipId>,
    awaiting_finish: Vec<ClipId>,
}

impl AnimationDirector {
    pub fn new<S: AsRef<str>>(clip_names: &[S], table: &CueTable) -> Self {
        let assignments = clip_names
            .iter()
            .map(|name| table.classify(name.as_ref()))
            .collect();
        Self {
            assignments,
            playing: Vec::new(),
            awaiting_finish: Vec::new(),
        }
    }

    pub fn clips_for(&self, cue: AnimationCue) -> Vec<ClipId> {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, assigned)| **assigned == Some(cue))
            .map(|(i, _)| ClipId(i))
            .collect()
    }

    /// Switches to `cue`. An empty plan still stops the previous clips so the
    /// host can decide to freeze on the last pose; it is logged, not an error.
    pub fn direct(&mut self, cue: AnimationCue) -> CuePlan {
        let clips = self.clips_for(cue);
        if clips.is_empty() {
            warn!(?cue, "no animation clips match cue");
        }
        self.playing = clips.clone();
        self.awaiting_finish = if cue.looping() {
            Vec::new()
        } else {
            clips.clone()
        };
        CuePlan {
            cue,
            clips,
            fade_in: CROSS_FADE_IN,
            looping: cue.looping(),
        }
    }

    pub fn playing(&self) -> &[ClipId] {
        &self.playing
    }

    /// Records that `clip` reached its end. True the first time a clip of the
    /// current cue finishes, meaning pose-derived mesh data must be refreshed.
    pub fn clip_finished(&mut self, clip: ClipId) -> bool {
        let Some(pos) = self.awaiting_finish.iter().position(|&c| c == clip) else {
            return false;
        };
        self.awaiting_finish.swap_remove(pos);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIPS: [&str; 5] = [
        "Monitor.Idle",
        "Screen.HoverEntry",
        "Monitor.HoverEntry",
        "Screen.HoverIdle",
        "Camera.Walk",
    ];

    #[test]
    fn longest_suffix_wins() {
        let table = CueTable::default();
        assert_eq!(table.classify("Screen.HoverIdle"), Some(AnimationCue::HoverIdle));
        assert_eq!(table.classify("Idle"), Some(AnimationCue::Idle));
        assert_eq!(table.classify("Camera.Walk"), None);
    }

    #[test]
    fn hyphenated_table_matches_builtin_clip_names() {
        let table = CueTable::hyphenated();
        assert_eq!(table.classify("Screen.Hover-entry"), Some(AnimationCue::HoverEntry));
        assert_eq!(table.classify("Screen.Hover-idle"), Some(AnimationCue::HoverIdle));
        assert_eq!(table.classify("Screen.Hover-exit"), Some(AnimationCue::HoverExit));
        assert_eq!(table.classify("Screen.Idle"), Some(AnimationCue::Idle));
        assert_eq!(CueTable::default().classify("Screen.Hover-idle"), None);
    }

    #[test]
    fn direct_starts_every_matching_clip() {
        let mut director = AnimationDirector::new(&CLIPS, &CueTable::default());
        let plan = director.direct(AnimationCue::HoverEntry);

        assert_eq!(plan.clips, vec![ClipId(1), ClipId(2)]);
        assert_eq!(plan.fade_in, CROSS_FADE_IN);
        assert!(!plan.looping);
        assert_eq!(director.playing(), &[ClipId(1), ClipId(2)]);
    }

    #[test]
    fn missing_cue_yields_empty_plan() {
        let mut director = AnimationDirector::new(&CLIPS, &CueTable::default());
        director.direct(AnimationCue::HoverEntry);
        let plan = director.direct(AnimationCue::HoverExit);
        assert!(plan.is_empty());
        assert!(director.playing().is_empty());
    }

    #[test]
    fn finish_is_reported_once_for_current_cue() {
        let mut director = AnimationDirector::new(&CLIPS, &CueTable::default());
        director.direct(AnimationCue::HoverEntry);

        assert!(director.clip_finished(ClipId(1)));
        assert!(!director.clip_finished(ClipId(1)));
        assert!(!director.clip_finished(ClipId(0)));

        director.direct(AnimationCue::HoverIdle);
        assert!(!director.clip_finished(ClipId(2)));
    }

    #[test]
    fn custom_table_changes_matching() {
        let table = CueTable {
            hover_entry: "Hover-entry".to_string(),
            ..CueTable::default()
        };
        let director = AnimationDirector::new(&["Cube|Hover-entry"], &table);
        assert_eq!(director.clips_for(AnimationCue::HoverEntry), vec![ClipId(0)]);
    }
}
