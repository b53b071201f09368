//! Stacking order tokens

overlay_struct! {
    /// Z-index per layer; overlays stack above page content in this order
    pub struct ZIndex / PartialZIndex {
        pub base: i32,
        pub dropdown: i32,
        pub sticky: i32,
        pub fixed: i32,
        #[serde(rename = "modalBackdrop")]
        pub modal_backdrop: i32,
        pub modal: i32,
        pub popover: i32,
        pub tooltip: i32,
    }
}

impl Default for ZIndex {
    fn default() -> Self {
        Self {
            base: 0,
            dropdown: 1000,
            sticky: 1100,
            fixed: 1200,
            modal_backdrop: 1300,
            modal: 1400,
            popover: 1500,
            tooltip: 1600,
        }
    }
}
