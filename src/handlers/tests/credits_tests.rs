use super::fixtures::{self, CREDITS_PAGE, CREDITS_PAGE_DUPLICATE_ACTOR, CREDITS_URL};
use crate::handlers::{NextStage, credits};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_yields_one_request_per_cast_photo() {
        let page = fixtures::page(CREDITS_URL, CREDITS_PAGE);
        let requests = credits::handle(&page);

        let urls: Vec<&str> = requests.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.example.com/name/nm0001/",
                "https://www.example.com/name/nm0002/?ref_=ttfc_fc_cl_i2",
            ]
        );
        assert!(requests.iter().all(|r| r.next == NextStage::Actor));
    }

    #[test]
    fn test_credits_keeps_duplicates_and_skips_missing_href() {
        let page = fixtures::page(CREDITS_URL, CREDITS_PAGE_DUPLICATE_ACTOR);
        let requests = credits::handle(&page);

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[test]
    fn test_credits_without_cast_yields_nothing() {
        let page = fixtures::page(CREDITS_URL, "<html><body><p>No cast yet</p></body></html>");
        assert!(credits::handle(&page).is_empty());
    }
}
