// src/constants.rs
//
// Application-wide constants.

/// Delay in milliseconds after spawning the browser before returning.
///
/// The rendered page lives in a temporary directory that is removed when the process
/// exits; the browser needs a moment to read the file first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Width of a cover thumbnail in the article list, in pixels.
///
/// Used in: `ports/html.rs`
pub const LIST_THUMBNAIL_PX: u32 = 144;

/// Size of the author avatar on the detail page, in pixels.
///
/// Used in: `ports/html.rs`
pub const AVATAR_PX: u32 = 64;
