//! Adaptive-state tracking driven by layout and interaction signals.
//!
//! The tracker owns the `AdaptiveState` record plus the bookkeeping needed to
//! update it: the observed element set, per-element size histories and the
//! cumulative click counter. Host observers (ResizeObserver,
//! IntersectionObserver, click listeners) feed it through the `record_*`
//! methods; every mutator reports whether the shared state changed so the
//! host can broadcast it.

use crate::config::AdaptiveConfig;
use crate::constants::{CLASS_IN_VIEWPORT, VISIBILITY_TOLERANCE};
use crate::density::{classify_element, marker_class, ALL_MARKER_CLASSES};
use crate::history::{DimensionHistory, DimensionSample, HistoryStore};
use crate::keys::ElementKeyGen;
use crate::observed::ObservedSet;
use crate::state::{AdaptiveState, ContentDensity, UserExpertise, Visualization};

/// Geometry and class-list access for an observed element.
///
/// Equality must be handle identity, not structural equality.
pub trait LayoutElement: Clone + PartialEq {
    /// The element's DOM id, if it has a non-empty one.
    fn dom_id(&self) -> Option<String>;
    fn child_count(&self) -> u32;
    /// `(clientWidth, clientHeight)`
    fn client_size(&self) -> (f64, f64);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResizeOutcome {
    pub key: String,
    pub density: ContentDensity,
    /// Whether the global `content_density` changed.
    pub changed: bool,
}

pub struct AdaptiveTracker<E> {
    state: AdaptiveState,
    observed: ObservedSet<E>,
    histories: HistoryStore,
    keys: ElementKeyGen,
    clicks: u64,
    config: AdaptiveConfig,
}

impl<E: LayoutElement> AdaptiveTracker<E> {
    pub fn new(config: AdaptiveConfig) -> Self {
        Self::with_key_gen(config, ElementKeyGen::new())
    }

    pub fn with_key_gen(config: AdaptiveConfig, keys: ElementKeyGen) -> Self {
        Self {
            state: AdaptiveState::default(),
            observed: ObservedSet::new(),
            histories: HistoryStore::default(),
            keys,
            clicks: 0,
            config,
        }
    }

    pub fn state(&self) -> &AdaptiveState {
        &self.state
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// Adds the element to the observed set. Returns true only the first time,
    /// which is when the host should attach its watchers.
    pub fn observe(&mut self, element: &E) -> bool {
        if self.observed.contains(element) {
            return false;
        }
        let key = self.keys.next_key();
        self.observed.insert(element.clone(), key)
    }

    /// Returns true if the element was observed and the host should detach
    /// its watchers. Size history is kept.
    pub fn unobserve(&mut self, element: &E) -> bool {
        self.observed.remove(element)
    }

    pub fn is_observed(&self, element: &E) -> bool {
        self.observed.contains(element)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    fn resolve_key(&mut self, element: &E) -> String {
        if let Some(id) = element.dom_id().filter(|id| !id.is_empty()) {
            return id;
        }
        match self.observed.key_of(element) {
            Some(key) => key.to_string(),
            None => self.keys.next_key(),
        }
    }

    /// Size history for the element's current key.
    pub fn history_for(&self, element: &E) -> Option<&DimensionHistory> {
        match element.dom_id().filter(|id| !id.is_empty()) {
            Some(id) => self.histories.get(&id),
            None => self
                .observed
                .key_of(element)
                .and_then(|k| self.histories.get(k)),
        }
    }

    pub fn history(&self, key: &str) -> Option<&DimensionHistory> {
        self.histories.get(key)
    }

    pub fn history_count(&self) -> usize {
        self.histories.len()
    }

    /// Handle one resize notification for one element.
    ///
    /// `width`/`height` are the observed content-rect size and go into the
    /// history only; the density score uses the element's current child count
    /// and client area.
    pub fn record_resize(
        &mut self,
        element: &E,
        width: f64,
        height: f64,
        now_ms: f64,
    ) -> ResizeOutcome {
        let key = self.resolve_key(element);
        self.histories.record(
            &key,
            DimensionSample {
                width,
                height,
                observed_at_ms: now_ms,
            },
            self.config.history_capacity,
        );

        let (client_w, client_h) = element.client_size();
        let density = classify_element(element.child_count(), client_w, client_h, &self.config);
        let changed = self.state.content_density != density;
        self.state.content_density = density;

        for class in ALL_MARKER_CLASSES {
            element.remove_class(class);
        }
        element.add_class(marker_class(density));

        log::debug!(
            "[adaptive] resize key={} {:.0}x{:.0} density={}",
            key,
            width,
            height,
            density.as_str()
        );
        ResizeOutcome {
            key,
            density,
            changed,
        }
    }

    /// Toggle the in-viewport marker; returns whether the element counts as visible.
    ///
    /// Ratios within `VISIBILITY_TOLERANCE` below the threshold count as visible.
    pub fn record_visibility(&self, element: &E, intersection_ratio: f64) -> bool {
        let visible =
            intersection_ratio + VISIBILITY_TOLERANCE >= self.config.visibility_threshold;
        if visible {
            element.add_class(CLASS_IN_VIEWPORT);
        } else {
            element.remove_class(CLASS_IN_VIEWPORT);
        }
        visible
    }

    pub fn apply_viewport_width(&mut self, width: f64) -> bool {
        let large = width >= self.config.large_display_min_width;
        let changed = self.state.is_large_display != large;
        self.state.is_large_display = large;
        changed
    }

    pub fn set_touch_mode(&mut self, touch: bool) -> bool {
        let changed = self.state.touch_mode != touch;
        self.state.touch_mode = touch;
        changed
    }

    /// Count one click; returns true when expertise was raised.
    pub fn record_click(&mut self) -> bool {
        self.clicks = self.clicks.saturating_add(1);
        let reached = if self.clicks > self.config.expert_clicks_above {
            UserExpertise::Expert
        } else if self.clicks > self.config.intermediate_clicks_above {
            UserExpertise::Intermediate
        } else {
            UserExpertise::Beginner
        };
        let next = self.state.user_expertise.max(reached);
        if next != self.state.user_expertise {
            log::info!(
                "[adaptive] expertise {} -> {} after {} clicks",
                self.state.user_expertise.as_str(),
                next.as_str(),
                self.clicks
            );
            self.state.user_expertise = next;
            return true;
        }
        false
    }

    pub fn click_count(&self) -> u64 {
        self.clicks
    }

    pub fn set_preferred_visualization(&mut self, kind: Visualization) -> bool {
        let changed = self.state.preferred_visualization != kind;
        self.state.preferred_visualization = kind;
        changed
    }

    pub fn set_color_blind_mode(&mut self, on: bool) -> bool {
        let changed = self.state.color_blind_mode != on;
        self.state.color_blind_mode = on;
        changed
    }
}

impl<E: LayoutElement> Default for AdaptiveTracker<E> {
    fn default() -> Self {
        Self::new(AdaptiveConfig::default())
    }
}
