//! Shared color palette for categories, goals and chart slices

/// Cyclic palette used when assigning colors to new categories and goals
pub const CATEGORY_PALETTE: [&str; 9] = [
    "#f97316", "#ef4444", "#f59e0b", "#ec4899", "#8b5cf6", "#3b82f6", "#6b7280", "#d946ef",
    "#10b981",
];

/// Color of the reserved "Other" category, also the fallback for
/// budget-vs-actual rows with no matching category
pub const OTHER_CATEGORY_COLOR: &str = "#6b7280";

/// Fallback slice color for expense categories with no budget entry
pub const UNBUDGETED_COLOR: &str = "#8884d8";

/// Palette color at the given position, wrapping around
pub fn color_for_index(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// A palette color derived from the name itself
///
/// The same name always maps to the same color, regardless of where it sits
/// in a listing. Distinct names may still share a color.
pub fn color_for_name(name: &str) -> &'static str {
    let hash = name
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
    color_for_index(hash as usize)
}
