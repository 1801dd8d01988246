use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarrantyPolicy {
    pub brand: &'static str,
    pub years: u32,
    /// Rated lifetime of the light source.
    pub hours: u32,
    pub note: &'static str,
    pub extra_services: &'static [&'static str],
}

pub const WARRANTY_POLICIES: &[WarrantyPolicy] = &[
    WarrantyPolicy {
        brand: "Philips",
        years: 3,
        hours: 25_000,
        note: "Warranty applies to most indoor LED products including flickering, dimming issues, or non-operational fixtures.",
        extra_services: &[
            "1-to-1 replacement within the first 12 months (conditions apply)",
            "Basic lighting design consultation",
            "Electrical system check for bulk installation",
        ],
    },
    WarrantyPolicy {
        brand: "OSRAM",
        years: 3,
        hours: 30_000,
        note: "Focused on energy-efficient LED solutions for residential and commercial lighting.",
        extra_services: &[
            "Lighting temperature & CRI consultation",
            "In-store product replacement support",
            "Project discount program for large quantities",
        ],
    },
    WarrantyPolicy {
        brand: "Artemide",
        years: 5,
        hours: 50_000,
        note: "Premium decorative and architectural lighting collections with extended warranty.",
        extra_services: &[
            "High-end lighting design advisory",
            "Technical support according to official installation guidelines",
            "Replacement support for drivers and LED modules",
        ],
    },
    WarrantyPolicy {
        brand: "Delta Light",
        years: 5,
        hours: 50_000,
        note: "Architectural lighting solutions for hotels, villas, studios, and showrooms with exceptional durability.",
        extra_services: &[
            "Advanced lighting layout consultation",
            "Glare & workspace lighting assessment",
            "Full coverage for LED modules and drivers during warranty",
        ],
    },
    WarrantyPolicy {
        brand: "Tom Dixon",
        years: 2,
        hours: 20_000,
        note: "Designer lighting focused on aesthetics, material finishing, and contemporary décor.",
        extra_services: &[
            "Care and surface maintenance guidance",
            "Collection styling consultation",
            "Support for ordering replacement parts and accessories",
        ],
    },
];

pub fn policy_for_brand(brand: &str) -> Option<&'static WarrantyPolicy> {
    WARRANTY_POLICIES
        .iter()
        .find(|p| p.brand.eq_ignore_ascii_case(brand.trim()))
}
