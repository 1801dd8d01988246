use crate::error::{Result, StorefrontError};

use super::models::{Company, CompanyHours, ContactInfo, SocialMedia, StoreData, Statistics};

/// Company profile and headline numbers.
///
/// Both live in optional sections of the catalog, so every accessor reports
/// a missing section as [`StorefrontError::NotFound`].
pub struct CompanyQuery<'a> {
    data: &'a StoreData,
}

impl<'a> CompanyQuery<'a> {
    pub fn new(data: &'a StoreData) -> Self {
        Self { data }
    }

    pub fn info(&self) -> Result<&'a Company> {
        self.data
            .company
            .as_ref()
            .ok_or_else(|| StorefrontError::NotFound("company section".to_string()))
    }

    pub fn statistics(&self) -> Result<&'a Statistics> {
        self.data
            .statistics
            .as_ref()
            .ok_or_else(|| StorefrontError::NotFound("statistics section".to_string()))
    }

    pub fn visitor_count(&self) -> Result<u64> {
        Ok(self.statistics()?.visitors_count)
    }

    /// The count a new visit would show. Nothing is written back.
    pub fn incremented_visitor_count(&self) -> Result<u64> {
        Ok(self.visitor_count()?.saturating_add(1))
    }

    pub fn founding_year(&self) -> Result<i32> {
        Ok(self.info()?.founded)
    }

    pub fn years_in_business(&self) -> Result<u32> {
        Ok(self.statistics()?.years_in_business)
    }

    pub fn social_media(&self) -> Result<&'a SocialMedia> {
        Ok(&self.info()?.social_media)
    }

    pub fn contact(&self) -> Result<&'a ContactInfo> {
        Ok(&self.info()?.contact)
    }

    pub fn opening_hours(&self) -> Result<&'a CompanyHours> {
        Ok(&self.info()?.opening_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with_visitors(visitors_count: u64) -> StoreData {
        StoreData {
            statistics: Some(Statistics {
                years_in_business: 12,
                lights_serviced: 48_000,
                brands_available: 5,
                satisfied_customers: 9_600,
                visitors_count,
            }),
            ..StoreData::default()
        }
    }

    #[test]
    fn incremented_count_adds_one() {
        let data = data_with_visitors(1_500);
        assert_eq!(CompanyQuery::new(&data).incremented_visitor_count().unwrap(), 1_501);
    }

    #[test]
    fn incremented_count_saturates() {
        let data = data_with_visitors(u64::MAX);
        assert_eq!(CompanyQuery::new(&data).incremented_visitor_count().unwrap(), u64::MAX);
    }

    #[test]
    fn missing_sections_are_not_found() {
        let data = StoreData::default();
        let company = CompanyQuery::new(&data);
        assert!(matches!(company.visitor_count(), Err(StorefrontError::NotFound(_))));
        assert!(matches!(company.founding_year(), Err(StorefrontError::NotFound(_))));
    }
}
