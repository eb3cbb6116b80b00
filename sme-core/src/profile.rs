//! Company profile and the option lists its form offers.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A closed list of choices with a stable id and a display label.
pub trait SelectOption: Sized + Copy + 'static {
    /// Name of the option list, used in errors.
    const KIND: &'static str;

    fn all() -> &'static [Self];
    fn value(self) -> &'static str;
    fn label(self) -> &'static str;

    /// Parse from either the id or the label, ignoring case.
    fn parse(s: &str) -> CoreResult<Self> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|o| {
                o.value().eq_ignore_ascii_case(wanted) || o.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CoreError::UnknownOption {
                kind: Self::KIND,
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    FoodBeverage,
    Retail,
    Technology,
    Manufacturing,
    Services,
    Healthcare,
    Education,
    Construction,
    Logistics,
    Other,
}

impl SelectOption for Industry {
    const KIND: &'static str = "industry";

    fn all() -> &'static [Self] {
        &[
            Industry::FoodBeverage,
            Industry::Retail,
            Industry::Technology,
            Industry::Manufacturing,
            Industry::Services,
            Industry::Healthcare,
            Industry::Education,
            Industry::Construction,
            Industry::Logistics,
            Industry::Other,
        ]
    }

    fn value(self) -> &'static str {
        match self {
            Industry::FoodBeverage => "food-beverage",
            Industry::Retail => "retail",
            Industry::Technology => "technology",
            Industry::Manufacturing => "manufacturing",
            Industry::Services => "services",
            Industry::Healthcare => "healthcare",
            Industry::Education => "education",
            Industry::Construction => "construction",
            Industry::Logistics => "logistics",
            Industry::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Industry::FoodBeverage => "Food & Beverage",
            Industry::Retail => "Retail",
            Industry::Technology => "Technology",
            Industry::Manufacturing => "Manufacturing",
            Industry::Services => "Professional Services",
            Industry::Healthcare => "Healthcare",
            Industry::Education => "Education",
            Industry::Construction => "Construction",
            Industry::Logistics => "Logistics & Transportation",
            Industry::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    SdnBhd,
    SoleProprietorship,
    Partnership,
    Llp,
    Other,
}

impl SelectOption for BusinessType {
    const KIND: &'static str = "business type";

    fn all() -> &'static [Self] {
        &[
            BusinessType::SdnBhd,
            BusinessType::SoleProprietorship,
            BusinessType::Partnership,
            BusinessType::Llp,
            BusinessType::Other,
        ]
    }

    fn value(self) -> &'static str {
        match self {
            BusinessType::SdnBhd => "sdn-bhd",
            BusinessType::SoleProprietorship => "sole-proprietorship",
            BusinessType::Partnership => "partnership",
            BusinessType::Llp => "llp",
            BusinessType::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BusinessType::SdnBhd => "Sdn Bhd",
            BusinessType::SoleProprietorship => "Sole Proprietorship",
            BusinessType::Partnership => "Partnership",
            BusinessType::Llp => "Limited Liability Partnership (LLP)",
            BusinessType::Other => "Other",
        }
    }
}

/// Malaysian states and federal territories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Kuala Lumpur")]
    KualaLumpur,
    Selangor,
    Penang,
    Johor,
    Perak,
    Kedah,
    Kelantan,
    Terengganu,
    Pahang,
    #[serde(rename = "Negeri Sembilan")]
    NegeriSembilan,
    Melaka,
    Perlis,
    Sabah,
    Sarawak,
    Labuan,
    Putrajaya,
}

impl SelectOption for Location {
    const KIND: &'static str = "location";

    fn all() -> &'static [Self] {
        &[
            Location::KualaLumpur,
            Location::Selangor,
            Location::Penang,
            Location::Johor,
            Location::Perak,
            Location::Kedah,
            Location::Kelantan,
            Location::Terengganu,
            Location::Pahang,
            Location::NegeriSembilan,
            Location::Melaka,
            Location::Perlis,
            Location::Sabah,
            Location::Sarawak,
            Location::Labuan,
            Location::Putrajaya,
        ]
    }

    fn value(self) -> &'static str {
        self.label()
    }

    fn label(self) -> &'static str {
        match self {
            Location::KualaLumpur => "Kuala Lumpur",
            Location::Selangor => "Selangor",
            Location::Penang => "Penang",
            Location::Johor => "Johor",
            Location::Perak => "Perak",
            Location::Kedah => "Kedah",
            Location::Kelantan => "Kelantan",
            Location::Terengganu => "Terengganu",
            Location::Pahang => "Pahang",
            Location::NegeriSembilan => "Negeri Sembilan",
            Location::Melaka => "Melaka",
            Location::Perlis => "Perlis",
            Location::Sabah => "Sabah",
            Location::Sarawak => "Sarawak",
            Location::Labuan => "Labuan",
            Location::Putrajaya => "Putrajaya",
        }
    }
}

/// Editable fields of the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    CompanyName,
    Industry,
    AnnualRevenue,
    Employees,
    YearEstablished,
    Location,
    BusinessType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub company_name: String,
    pub industry: Industry,
    /// Annual revenue (RM).
    pub annual_revenue: f64,
    pub employees: u32,
    pub year_established: i32,
    pub location: Location,
    pub business_type: BusinessType,
}

impl BusinessProfile {
    pub fn sample() -> Self {
        Self {
            company_name: "Kedai Kopi Warisan Sdn Bhd".into(),
            industry: Industry::FoodBeverage,
            annual_revenue: 850_000.0,
            employees: 12,
            year_established: 2019,
            location: Location::KualaLumpur,
            business_type: BusinessType::SdnBhd,
        }
    }

    /// Apply one form edit, parsing the raw text the way the field expects.
    pub fn set_field(&mut self, field: ProfileField, raw: &str) -> CoreResult<()> {
        let raw = raw.trim();
        match field {
            ProfileField::CompanyName => self.company_name = raw.to_string(),
            ProfileField::Industry => self.industry = Industry::parse(raw)?,
            ProfileField::AnnualRevenue => {
                let value: f64 = parse_number("annual_revenue", raw)?;
                if !value.is_finite() {
                    return Err(CoreError::NotFinite {
                        field: "annual_revenue",
                        value,
                    });
                }
                if value < 0.0 {
                    return Err(CoreError::OutOfRange {
                        field: "annual_revenue",
                        value,
                        min: 0.0,
                        max: f64::INFINITY,
                    });
                }
                self.annual_revenue = value;
            }
            ProfileField::Employees => self.employees = parse_number("employees", raw)?,
            ProfileField::YearEstablished => {
                self.year_established = parse_number("year_established", raw)?
            }
            ProfileField::Location => self.location = Location::parse(raw)?,
            ProfileField::BusinessType => self.business_type = BusinessType::parse(raw)?,
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> CoreResult<T> {
    raw.parse().map_err(|_| CoreError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
