use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Attribute selector every observed section carries.
pub const SCROLL_SECTION_SELECTOR: &str = "[data-scroll-section]";

/// Observer settings for scroll-triggered reveals.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the target that must be visible before it counts.
    pub threshold: f64,
    /// CSS margin applied to the viewport when computing intersections.
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    About,
    Skills,
    Hobbies,
    Goals,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Hobbies,
        Section::Goals,
    ];

    /// The DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Hobbies => "hobbies",
            Section::Goals => "goals",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Ids of the elements that have scrolled into view.
///
/// The set only ever grows: once a section has been revealed it stays
/// revealed for the lifetime of the page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSections {
    ids: BTreeSet<String>,
}

impl RevealedSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` was not revealed before. Empty ids are ignored.
    pub fn insert(&mut self, id: &str) -> bool {
        if id.is_empty() || self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }

    /// Records a batch of observer entries given as `(target id, is_intersecting)`.
    ///
    /// Returns how many ids were newly revealed.
    pub fn record<I, S>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .filter(|(_, is_intersecting)| *is_intersecting)
            .filter(|(id, _)| self.insert(id.as_ref()))
            .count()
    }

    pub fn reveal_all(&mut self) -> usize {
        self.record(Section::ALL.map(|s| (s.id(), true)))
    }

    pub fn contains(&self, section: Section) -> bool {
        self.contains_id(section.id())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// Transition variants used by the page, each a pair of shown/hidden classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    RiseShort,
    Rise,
    SlideFromLeft,
    SlideFromRight,
    NudgeFromLeft,
    Zoom,
}

impl Reveal {
    pub fn classes(self, shown: bool) -> &'static str {
        match (self, shown) {
            (Reveal::RiseShort | Reveal::Rise, true) => "opacity-100 translate-y-0",
            (Reveal::RiseShort, false) => "opacity-0 translate-y-10",
            (Reveal::Rise, false) => "opacity-0 translate-y-20",
            (Reveal::SlideFromLeft | Reveal::SlideFromRight | Reveal::NudgeFromLeft, true) => {
                "opacity-100 translate-x-0"
            }
            (Reveal::SlideFromLeft, false) => "opacity-0 -translate-x-20",
            (Reveal::SlideFromRight, false) => "opacity-0 translate-x-20",
            (Reveal::NudgeFromLeft, false) => "opacity-0 -translate-x-10",
            (Reveal::Zoom, true) => "opacity-100 scale-100",
            (Reveal::Zoom, false) => "opacity-0 scale-90",
        }
    }

    /// Cards in a row slide in from alternating sides.
    ///
    /// Even indices come from the left and odd ones from the right, rather than
    /// only the first card from the left; the two agree for a two-card row.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Reveal::SlideFromLeft
        } else {
            Reveal::SlideFromRight
        }
    }
}

/// What the tracker does with the nodes matching [`SCROLL_SECTION_SELECTOR`] at mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverPlan<T> {
    /// Watch these elements with a single observer.
    Observe(Vec<T>),
    /// No observer available in this browser: show everything.
    RevealAll,
    /// Nothing on the page to watch.
    Idle,
}

/// Picks the observed set once. `None` candidates are matches that aren't elements.
pub fn plan_observer<T, I>(supported: bool, candidates: I) -> ObserverPlan<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    if !supported {
        return ObserverPlan::RevealAll;
    }
    let targets = candidates.into_iter().flatten().collect::<Vec<_>>();
    if targets.is_empty() {
        ObserverPlan::Idle
    } else {
        ObserverPlan::Observe(targets)
    }
}

pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Inline style for a delayed transition. Hidden elements reset without delay.
pub fn transition_delay(shown: bool, delay_ms: u32) -> String {
    let delay = if shown { delay_ms } else { 0 };
    format!("transition-delay: {delay}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RevealOptions::default();
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, "0px 0px -100px 0px");
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
        assert_eq!(
            "footer".parse::<Section>(),
            Err(UnknownSection("footer".to_string()))
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut revealed = RevealedSections::new();
        assert!(revealed.is_empty());
        assert!(revealed.insert("about"));
        assert!(!revealed.insert("about"));
        assert_eq!(revealed.len(), 1);
        assert!(revealed.contains(Section::About));
        assert!(!revealed.contains(Section::Skills));
    }

    #[test]
    fn test_empty_id_ignored() {
        let mut revealed = RevealedSections::new();
        assert!(!revealed.insert(""));
        assert_eq!(revealed.record([("", true)]), 0);
        assert!(revealed.is_empty());
    }

    #[test]
    fn test_record_only_intersecting() {
        let mut revealed = RevealedSections::new();
        let newly = revealed.record([("about", true), ("skills", false), ("hobbies", true)]);
        assert_eq!(newly, 2);
        assert!(revealed.contains(Section::About));
        assert!(!revealed.contains(Section::Skills));
        assert!(revealed.contains(Section::Hobbies));
    }

    #[test]
    fn test_record_never_removes() {
        let mut revealed = RevealedSections::new();
        revealed.record([("goals", true)]);
        // scrolled back out of view
        let newly = revealed.record([("goals", false)]);
        assert_eq!(newly, 0);
        assert!(revealed.contains(Section::Goals));
    }

    #[test]
    fn test_record_counts_duplicates_once() {
        let mut revealed = RevealedSections::new();
        let newly = revealed.record(vec![
            ("skills".to_string(), true),
            ("skills".to_string(), true),
        ]);
        assert_eq!(newly, 1);
        assert_eq!(revealed.record([("skills", true)]), 0);
    }

    #[test]
    fn test_unknown_ids_are_tracked() {
        let mut revealed = RevealedSections::new();
        revealed.record([("contact", true)]);
        assert!(revealed.contains_id("contact"));
        assert!(Section::ALL.iter().all(|s| !revealed.contains(*s)));
    }

    #[test]
    fn test_reveal_all() {
        let mut revealed = RevealedSections::new();
        revealed.insert("about");
        assert_eq!(revealed.reveal_all(), 3);
        assert!(Section::ALL.iter().all(|s| revealed.contains(*s)));
        assert_eq!(
            revealed.iter().collect::<Vec<_>>(),
            vec!["about", "goals", "hobbies", "skills"]
        );
    }

    #[test]
    fn test_reveal_classes() {
        assert_eq!(Reveal::Rise.classes(true), "opacity-100 translate-y-0");
        assert_eq!(Reveal::Rise.classes(false), "opacity-0 translate-y-20");
        assert_eq!(Reveal::RiseShort.classes(false), "opacity-0 translate-y-10");
        assert_eq!(Reveal::Zoom.classes(true), "opacity-100 scale-100");
        assert_eq!(Reveal::Zoom.classes(false), "opacity-0 scale-90");
        assert_eq!(
            Reveal::NudgeFromLeft.classes(false),
            "opacity-0 -translate-x-10"
        );
        for reveal in [
            Reveal::SlideFromLeft,
            Reveal::SlideFromRight,
            Reveal::NudgeFromLeft,
        ] {
            assert_eq!(reveal.classes(true), "opacity-100 translate-x-0");
        }
    }

    #[test]
    fn test_alternating_sides() {
        assert_eq!(Reveal::alternating(0), Reveal::SlideFromLeft);
        assert_eq!(Reveal::alternating(1), Reveal::SlideFromRight);
        assert_eq!(Reveal::alternating(2), Reveal::SlideFromLeft);
        assert_eq!(
            Reveal::alternating(0).classes(false),
            "opacity-0 -translate-x-20"
        );
        assert_eq!(
            Reveal::alternating(1).classes(false),
            "opacity-0 translate-x-20"
        );
    }

    #[test]
    fn test_plan_observes_every_section() {
        let candidates = Section::ALL.map(|s| Some(s.id()));
        assert_eq!(
            plan_observer(true, candidates),
            ObserverPlan::Observe(vec!["about", "skills", "hobbies", "goals"])
        );
    }

    #[test]
    fn test_plan_skips_non_elements() {
        let plan = plan_observer(true, [Some("about"), None, Some("goals")]);
        assert_eq!(plan, ObserverPlan::Observe(vec!["about", "goals"]));
    }

    #[test]
    fn test_plan_without_targets() {
        assert_eq!(plan_observer::<&str, _>(true, []), ObserverPlan::Idle);
        assert_eq!(plan_observer::<&str, _>(true, [None]), ObserverPlan::Idle);
    }

    #[test]
    fn test_plan_unsupported_reveals_all() {
        let plan = plan_observer(false, [Some("about")]);
        assert_eq!(plan, ObserverPlan::RevealAll);
        let mut revealed = RevealedSections::new();
        revealed.reveal_all();
        assert!(Section::ALL.iter().all(|s| revealed.contains(*s)));
    }

    #[test]
    fn test_transition_delay() {
        assert_eq!(stagger(0, 150), 0);
        assert_eq!(stagger(3, 150), 450);
        assert_eq!(stagger(usize::MAX, 200), u32::MAX);
        assert_eq!(transition_delay(true, stagger(2, 200)), "transition-delay: 400ms");
        assert_eq!(transition_delay(false, 400), "transition-delay: 0ms");
    }
}
