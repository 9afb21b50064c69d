// DOM hooks and presentation constants for the backdrop layer.
// Layout tuning lives in `backdrop_core::constants`; these only describe how
// the page exposes and styles the layer.

// Element that receives the icon nodes
pub const LAYER_ELEMENT_ID: &str = "background-icons";

// Class names understood by the page stylesheet
pub const ICON_CLASS: &str = "bg-icon";
pub const ICON_SPIN_CLASS: &str = "bg-icon--spin"; // wide layout: rotate in place
pub const ICON_RAIN_CLASS: &str = "bg-icon--rain"; // narrow layout: fall through the band

// Attribute carrying the icon identifier for the stylesheet/sprite lookup
pub const ICON_DATA_ATTR: &str = "data-icon";

// Fractional digits kept when writing numbers into inline styles
pub const STYLE_PRECISION: usize = 3;
