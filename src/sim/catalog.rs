//! Static material and vehicle tables

/// Construction material family; also keys the bridge photo used for overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Steel,
    Concrete,
    Wood,
    Cable,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 4] = [
        MaterialKind::Steel,
        MaterialKind::Concrete,
        MaterialKind::Wood,
        MaterialKind::Cable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Steel => "steel",
            MaterialKind::Concrete => "concrete",
            MaterialKind::Wood => "wood",
            MaterialKind::Cable => "cable",
        }
    }

    /// Static photo drawn behind beams of this kind
    pub fn image_url(&self) -> &'static str {
        match self {
            MaterialKind::Steel => "/realistic-steel-truss-bridge-over-river.jpg",
            MaterialKind::Concrete => "/realistic-concrete-arch-bridge-over-river.jpg",
            MaterialKind::Wood => "/realistic-wooden-covered-bridge-over-river.jpg",
            MaterialKind::Cable => "/realistic-cable-stayed-bridge-over-river.jpg",
        }
    }

    /// Dense index for per-kind lookup tables
    pub fn index(&self) -> usize {
        match self {
            MaterialKind::Steel => 0,
            MaterialKind::Concrete => 1,
            MaterialKind::Wood => 2,
            MaterialKind::Cable => 3,
        }
    }
}

/// A purchasable beam material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub name: &'static str,
    /// Price per beam
    pub cost: u32,
    /// Load-bearing contribution per beam
    pub strength: u32,
    /// CSS color of the beam stroke
    pub color: &'static str,
    pub kind: MaterialKind,
}

pub const MATERIALS: [Material; 4] = [
    Material {
        name: "فولاد",
        cost: 500,
        strength: 10,
        color: "#718096",
        kind: MaterialKind::Steel,
    },
    Material {
        name: "بتن",
        cost: 300,
        strength: 7,
        color: "#A0AEC0",
        kind: MaterialKind::Concrete,
    },
    Material {
        name: "چوب",
        cost: 150,
        strength: 4,
        color: "#D69E2E",
        kind: MaterialKind::Wood,
    },
    Material {
        name: "کابل",
        cost: 400,
        strength: 8,
        color: "#4A5568",
        kind: MaterialKind::Cable,
    },
];

/// A test load. The catalog doubles as the difficulty ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub name: &'static str,
    pub icon: &'static str,
    pub required_strength: u32,
    /// Time to cross the span in milliseconds
    pub speed: u32,
}

pub const VEHICLES: [Vehicle; 8] = [
    Vehicle { name: "دوچرخه", icon: "🚲", required_strength: 15, speed: 4000 },
    Vehicle { name: "موتورسیکلت", icon: "🏍️", required_strength: 25, speed: 3500 },
    Vehicle { name: "ماشین", icon: "🚗", required_strength: 40, speed: 3200 },
    Vehicle { name: "خاور", icon: "🚐", required_strength: 60, speed: 3500 },
    Vehicle { name: "کامیون", icon: "🚚", required_strength: 80, speed: 3800 },
    Vehicle { name: "اتوبوس", icon: "🚌", required_strength: 100, speed: 4000 },
    Vehicle { name: "تریلی", icon: "🚛", required_strength: 130, speed: 4500 },
    Vehicle { name: "تریلی سنگین", icon: "🚛", required_strength: 160, speed: 5000 },
];

/// Index of the hardest vehicle
pub const LAST_VEHICLE: usize = VEHICLES.len() - 1;

/// Vehicle at `index`, clamped to the end of the ladder
pub fn vehicle(index: usize) -> &'static Vehicle {
    &VEHICLES[index.min(LAST_VEHICLE)]
}

/// Material at `index`, if it exists
pub fn material(index: usize) -> Option<&'static Material> {
    MATERIALS.get(index)
}
