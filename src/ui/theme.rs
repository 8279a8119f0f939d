use ratatui::style::Color;

// Primary brand colors
pub const ACCENT: Color = Color::Rgb(95, 179, 196);        // #5fb3c4 - cool teal
pub const ACCENT_DIM: Color = Color::Rgb(72, 138, 152);    // Dimmed teal
pub const SUCCESS: Color = Color::Rgb(134, 188, 111);      // Soft green
pub const WARNING: Color = Color::Rgb(229, 192, 123);      // Warm amber

// Text colors
pub const TEXT: Color = Color::Rgb(236, 236, 236);         // Primary text
pub const TEXT_SECONDARY: Color = Color::Rgb(178, 178, 178); // Secondary text
pub const TEXT_MUTED: Color = Color::Rgb(140, 140, 140);   // Muted text

// Background colors
pub const BG_BASE: Color = Color::Rgb(30, 32, 36);         // Darkest background
pub const BG_SURFACE: Color = Color::Rgb(44, 47, 52);      // Content panels
pub const BG_ELEVATED: Color = Color::Rgb(58, 62, 68);     // Overlay / elevated elements
pub const BG_INPUT: Color = Color::Rgb(52, 55, 60);        // Input fields

// Border colors
pub const BORDER: Color = Color::Rgb(62, 66, 72);          // Subtle border
pub const BORDER_FOCUS: Color = Color::Rgb(95, 179, 196);  // Accent color for focus

// Speaker colors in the chat view
pub const USER: Color = Color::Rgb(95, 179, 196);          // Teal for the user
pub const GPT: Color = Color::Rgb(134, 188, 111);          // Green for the assistant
