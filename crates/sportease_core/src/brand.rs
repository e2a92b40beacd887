/// Static brand configuration for the landing page.
///
/// Everything here is a compile-time constant; nothing mutates at runtime.
/// The shell installs the primary color as the process-wide theme once at
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "SportEase",
    primary: "#00C853",
    secondary: "#212121",
    accent: "#2196F3",
    heading_font: "Poppins",
    body_font: "Inter",
};
