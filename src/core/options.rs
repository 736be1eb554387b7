use serde::{Deserialize, Serialize};
use serde_json::map::Entry;
use serde_json::{Map, Value};

/// Structural merge of a partial record over a fully populated one.
///
/// Implementations are total: every leaf set in the partial replaces the
/// matching leaf, every other leaf keeps its current value. Values are never
/// validated.
pub trait MergeOptions: Sized {
    type Partial;

    #[must_use]
    fn merge(self, partial: Self::Partial) -> Self;
}

/// Deep-merges `partial` over `defaults`.
#[must_use]
pub fn merge_options<O: MergeOptions>(defaults: O, partial: O::Partial) -> O {
    defaults.merge(partial)
}

/// Configuration schema of one chart variant.
///
/// Concrete charts embed `ChartOptions` in their own option record and add
/// their own groups next to it.
pub trait ChartConfig: MergeOptions + Clone + std::fmt::Debug {
    fn default_options() -> Self;

    /// Base options consumed by `ChartBase` layout and styling.
    fn chart_options(&self) -> &ChartOptions;
}

/// Margins subtracted from the container to obtain the drawable area, in pixels.
///
/// Every option group carries an `extra` map: keys the group does not
/// recognize are kept there and merged like top-level extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Padding {
    #[must_use]
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialPadding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartialPadding {
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: Some(value),
            bottom: Some(value),
            left: Some(value),
            right: Some(value),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_top(mut self, value: f64) -> Self {
        self.top = Some(value);
        self
    }

    #[must_use]
    pub fn with_bottom(mut self, value: f64) -> Self {
        self.bottom = Some(value);
        self
    }

    #[must_use]
    pub fn with_left(mut self, value: f64) -> Self {
        self.left = Some(value);
        self
    }

    #[must_use]
    pub fn with_right(mut self, value: f64) -> Self {
        self.right = Some(value);
        self
    }
}

impl MergeOptions for Padding {
    type Partial = PartialPadding;

    fn merge(mut self, partial: PartialPadding) -> Self {
        merge_extra(&mut self.extra, partial.extra);
        Self {
            top: partial.top.unwrap_or(self.top),
            bottom: partial.bottom.unwrap_or(self.bottom),
            left: partial.left.unwrap_or(self.left),
            right: partial.right.unwrap_or(self.right),
            extra: self.extra,
        }
    }
}

/// Style-class names for the root surface (`svg`) and the content group (`canvas`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartClasses {
    pub svg: String,
    pub canvas: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ChartClasses {
    fn default() -> Self {
        Self {
            svg: "chart".to_owned(),
            canvas: "chart__canvas".to_owned(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialChartClasses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartialChartClasses {
    #[must_use]
    pub fn with_svg(mut self, class: impl Into<String>) -> Self {
        self.svg = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, class: impl Into<String>) -> Self {
        self.canvas = Some(class.into());
        self
    }
}

impl MergeOptions for ChartClasses {
    type Partial = PartialChartClasses;

    fn merge(mut self, partial: PartialChartClasses) -> Self {
        merge_extra(&mut self.extra, partial.extra);
        Self {
            svg: partial.svg.unwrap_or(self.svg),
            canvas: partial.canvas.unwrap_or(self.canvas),
            extra: self.extra,
        }
    }
}

/// Transition settings. Only stored here; concrete charts drive the timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationOptions {
    /// Milliseconds.
    pub duration: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: 1000.0,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialAnimationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MergeOptions for AnimationOptions {
    type Partial = PartialAnimationOptions;

    fn merge(mut self, partial: PartialAnimationOptions) -> Self {
        merge_extra(&mut self.extra, partial.extra);
        Self {
            duration: partial.duration.unwrap_or(self.duration),
            extra: self.extra,
        }
    }
}

/// Fully resolved base configuration shared by every chart type.
///
/// Keys outside the recognized groups are kept in `extra` so they survive a
/// merge, but nothing in this crate reads them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    pub padding: Padding,
    pub classes: ChartClasses,
    pub animation: AnimationOptions,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartOptions {
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_classes(mut self, svg: impl Into<String>, canvas: impl Into<String>) -> Self {
        self.classes.svg = svg.into();
        self.classes.canvas = canvas.into();
        self
    }

    #[must_use]
    pub fn with_animation_duration(mut self, duration: f64) -> Self {
        self.animation.duration = duration;
        self
    }
}

/// Caller-supplied configuration; any group or leaf may be left out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<PartialPadding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<PartialChartClasses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<PartialAnimationOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartialChartOptions {
    #[must_use]
    pub fn with_padding(mut self, padding: PartialPadding) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_classes(mut self, classes: PartialChartClasses) -> Self {
        self.classes = Some(classes);
        self
    }

    #[must_use]
    pub fn with_animation_duration(mut self, duration: f64) -> Self {
        self.animation
            .get_or_insert_with(PartialAnimationOptions::default)
            .duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl From<PartialPadding> for PartialChartOptions {
    fn from(padding: PartialPadding) -> Self {
        Self::default().with_padding(padding)
    }
}

impl MergeOptions for ChartOptions {
    type Partial = PartialChartOptions;

    fn merge(mut self, partial: PartialChartOptions) -> Self {
        if let Some(padding) = partial.padding {
            self.padding = self.padding.merge(padding);
        }
        if let Some(classes) = partial.classes {
            self.classes = self.classes.merge(classes);
        }
        if let Some(animation) = partial.animation {
            self.animation = self.animation.merge(animation);
        }
        merge_extra(&mut self.extra, partial.extra);
        self
    }
}

impl ChartConfig for ChartOptions {
    fn default_options() -> Self {
        Self::default()
    }

    fn chart_options(&self) -> &ChartOptions {
        self
    }
}

fn merge_extra(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match base.entry(key) {
            Entry::Occupied(mut slot) => merge_json_value(slot.get_mut(), value),
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

/// Objects merge key by key; any other overlay value replaces the base.
fn merge_json_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            merge_extra(base_map, overlay_map);
        }
        (slot, overlay) => *slot = overlay,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        ChartOptions, MergeOptions, Padding, PartialChartOptions, PartialPadding,
        merge_json_value,
    };

    #[test]
    fn nested_extra_objects_merge_per_key() {
        let mut base = json!({ "legend": { "show": true, "position": "top" } });
        merge_json_value(&mut base, json!({ "legend": { "position": "bottom" } }));
        assert_eq!(base, json!({ "legend": { "show": true, "position": "bottom" } }));
    }

    #[test]
    fn non_object_extra_replaces_base() {
        let mut base = json!({ "legend": { "show": true } });
        merge_json_value(&mut base, json!({ "legend": false }));
        assert_eq!(base, json!({ "legend": false }));
    }

    #[test]
    fn group_extras_merge_next_to_typed_leaves() {
        let mut base = Padding::default();
        base.extra.insert("inner".to_owned(), json!({ "x": 1, "y": 1 }));
        let mut partial = PartialPadding::default().with_left(50.0);
        partial.extra.insert("inner".to_owned(), json!({ "y": 3 }));

        let merged = base.merge(partial);
        assert_eq!(merged.left, 50.0);
        assert_eq!(merged.top, 10.0);
        assert_eq!(merged.extra["inner"], json!({ "x": 1, "y": 3 }));
    }

    #[test]
    fn empty_partial_keeps_defaults() {
        let merged = ChartOptions::default().merge(PartialChartOptions::default());
        assert_eq!(merged, ChartOptions::default());
    }
}
