use super::fixtures::{self, ACTOR_PAGE, ACTOR_PAGE_NO_FILMOGRAPHY, ACTOR_PAGE_NO_NAME, ACTOR_URL};
use crate::handlers::actor;
use crate::results::CastRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_records_follow_filmography_order() {
        let page = fixtures::page(ACTOR_URL, ACTOR_PAGE);
        let records = actor::handle(&page);

        assert_eq!(
            records,
            vec![
                CastRecord::new("Jane Doe", "Film A"),
                CastRecord::new("Jane Doe", "Film B"),
                CastRecord::new("Jane Doe", "Film A"),
                CastRecord::new("Jane Doe", "Film C"),
            ]
        );
    }

    #[test]
    fn test_actor_ignores_links_outside_bold_title() {
        let page = fixtures::page(ACTOR_URL, ACTOR_PAGE);
        let titles = actor::filmography_titles(&page);
        assert!(!titles.iter().any(|t| t == "Episode"));
    }

    #[test]
    fn test_actor_handler_is_repeatable() {
        let page = fixtures::page(ACTOR_URL, ACTOR_PAGE);
        assert_eq!(actor::handle(&page), actor::handle(&page));
    }

    #[test]
    fn test_actor_without_filmography_yields_nothing() {
        let page = fixtures::page(ACTOR_URL, ACTOR_PAGE_NO_FILMOGRAPHY);
        assert_eq!(actor::actor_name(&page), "John Roe");
        assert!(actor::handle(&page).is_empty());
    }

    #[test]
    fn test_actor_without_header_has_empty_name() {
        let page = fixtures::page(ACTOR_URL, ACTOR_PAGE_NO_NAME);
        let records = actor::handle(&page);
        assert_eq!(records, vec![CastRecord::new("", "Untitled Project")]);
    }
}
