/// Colour of the status badge in a detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeTone {
    Green,
    Red,
    /// Darker red, kept distinct from `Red` so banned entries stand out.
    DarkRed,
    Yellow,
    #[default]
    Blue,
}

impl BadgeTone {
    pub fn from_status(status: &str) -> Self {
        match status {
            "Active" => BadgeTone::Green,
            "Inactive" => BadgeTone::Red,
            "Banned" => BadgeTone::DarkRed,
            "Pending" => BadgeTone::Yellow,
            _ => BadgeTone::Blue,
        }
    }

    /// Tailwind classes for the badge.
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Green => "bg-green-100 text-green-800",
            BadgeTone::Red => "bg-red-100 text-red-700",
            BadgeTone::DarkRed => "bg-red-200 text-red-900",
            BadgeTone::Yellow => "bg-yellow-100 text-yellow-800",
            BadgeTone::Blue => "bg-blue-100 text-blue-800",
        }
    }
}
