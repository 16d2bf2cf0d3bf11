#[cfg(test)]
mod tests {
    use crate::db::properties::{build_search_query, SearchParam, DEFAULT_SEARCH_LIMIT};
    use crate::models::PropertySearch;
    use regex::Regex;

    fn placeholders(sql: &str) -> Vec<usize> {
        let re = Regex::new(r"\$(\d+)").unwrap();
        re.captures_iter(sql)
            .map(|c| c[1].parse().unwrap())
            .collect()
    }

    /// All 16 subsets of the four WHERE-clause filters, with and without a
    /// rating bound.
    fn filter_subsets() -> Vec<PropertySearch> {
        let mut subsets = Vec::new();
        for mask in 0u32..16 {
            for with_rating in [false, true] {
                subsets.push(PropertySearch {
                    city: ((mask & 1) != 0).then(|| "ville".to_string()),
                    owner_id: ((mask & 2) != 0).then_some(42),
                    minimum_price_per_night: ((mask & 4) != 0).then_some(5000),
                    maximum_price_per_night: ((mask & 8) != 0).then_some(20000),
                    minimum_rating: with_rating.then_some(3.5),
                });
            }
        }
        subsets
    }

    #[test]
    fn placeholder_indices_are_contiguous_from_one() {
        for search in filter_subsets() {
            let (sql, params) = build_search_query(&search, 7);
            let seen = placeholders(&sql);
            let expected: Vec<usize> = (1..=params.len()).collect();
            assert_eq!(seen, expected, "filters: {:?}", search);
        }
    }

    #[test]
    fn first_predicate_opens_where_rest_open_and() {
        for search in filter_subsets() {
            let (sql, _) = build_search_query(&search, 7);
            let predicate_count = [
                search.city.is_some(),
                search.owner_id.is_some(),
                search.minimum_price_per_night.is_some(),
                search.maximum_price_per_night.is_some(),
            ]
            .iter()
            .filter(|p| **p)
            .count();

            assert_eq!(
                sql.matches("WHERE ").count(),
                usize::from(predicate_count > 0),
                "filters: {:?}",
                search
            );
            assert_eq!(
                sql.matches("AND ").count(),
                predicate_count.saturating_sub(1),
                "filters: {:?}",
                search
            );
        }
    }

    #[test]
    fn limit_is_always_the_final_parameter() {
        for search in filter_subsets() {
            let (sql, params) = build_search_query(&search, 7);
            assert!(sql.ends_with(&format!("LIMIT ${}", params.len())));
            assert_eq!(params.last(), Some(&SearchParam::Int(7)));
        }
    }

    #[test]
    fn having_appears_iff_rating_bound_present_and_after_group_by() {
        for search in filter_subsets() {
            let (sql, _) = build_search_query(&search, 7);
            assert!(sql.contains("GROUP BY properties.id"));
            if search.minimum_rating.is_some() {
                let group_at = sql.find("GROUP BY").unwrap();
                let having_at = sql.find("HAVING").unwrap();
                assert!(having_at > group_at, "HAVING before GROUP BY: {}", sql);
            } else {
                assert!(!sql.contains("HAVING"), "unexpected HAVING: {}", sql);
            }
        }
    }

    #[test]
    fn city_only_search() {
        let search = PropertySearch {
            city: Some("van".to_string()),
            ..Default::default()
        };
        let (sql, params) = build_search_query(&search, 5);

        assert_eq!(
            params,
            vec![
                SearchParam::Text("%van%".to_string()),
                SearchParam::Int(5),
            ]
        );
        assert_eq!(sql.matches("WHERE ").count(), 1);
        assert!(sql.contains("WHERE properties.city LIKE $1"));
        assert!(!sql.contains("AND "));
        assert!(!sql.contains("HAVING"));
    }

    #[test]
    fn owner_and_rating_search_uses_default_limit() {
        let search = PropertySearch {
            owner_id: Some(3),
            minimum_rating: Some(4.0),
            ..Default::default()
        };
        let (sql, params) = build_search_query(&search, DEFAULT_SEARCH_LIMIT);

        assert_eq!(
            params,
            vec![
                SearchParam::Int(3),
                SearchParam::Real(4.0),
                SearchParam::Int(10),
            ]
        );
        assert!(sql.contains("WHERE properties.owner_id = $1"));
        assert!(sql.contains("HAVING avg(property_reviews.rating) >= $2"));
        assert!(sql.ends_with("LIMIT $3"));

        let where_at = sql.find("WHERE").unwrap();
        let group_at = sql.find("GROUP BY").unwrap();
        let having_at = sql.find("HAVING").unwrap();
        let limit_at = sql.find("LIMIT").unwrap();
        assert!(where_at < group_at && group_at < having_at && having_at < limit_at);
    }

    #[test]
    fn empty_filter_set_still_groups_orders_and_limits() {
        let (sql, params) = build_search_query(&PropertySearch::default(), 1);

        assert_eq!(params, vec![SearchParam::Int(1)]);
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("HAVING"));
        assert!(sql.contains("GROUP BY properties.id"));
        assert!(sql.contains("ORDER BY properties.cost_per_night ASC"));
        assert!(sql.ends_with("LIMIT $1"));
    }

    #[test]
    fn where_introducer_does_not_depend_on_city_being_present() {
        // owner_id is second in the fixed order; with city absent it must
        // still open the clause with WHERE.
        let search = PropertySearch {
            owner_id: Some(9),
            ..Default::default()
        };
        let (sql, _) = build_search_query(&search, 5);
        assert!(sql.contains("WHERE properties.owner_id = $1"));
        assert!(!sql.contains("AND "));
    }

    #[test]
    fn price_band_filters_keep_fixed_order() {
        let search = PropertySearch {
            minimum_price_per_night: Some(5000),
            maximum_price_per_night: Some(20000),
            ..Default::default()
        };
        let (sql, params) = build_search_query(&search, 5);

        assert!(sql.contains("WHERE properties.cost_per_night >= $1"));
        assert!(sql.contains("AND properties.cost_per_night <= $2"));
        assert_eq!(
            params,
            vec![
                SearchParam::Int(5000),
                SearchParam::Int(20000),
                SearchParam::Int(5),
            ]
        );
    }

    #[test]
    fn filter_values_never_appear_in_statement_text() {
        let search = PropertySearch {
            city: Some("van'; DROP TABLE properties; --".to_string()),
            owner_id: Some(987654),
            minimum_price_per_night: Some(123456),
            maximum_price_per_night: Some(654321),
            minimum_rating: Some(4.75),
        };
        let (sql, params) = build_search_query(&search, 33);

        assert!(!sql.contains("van"));
        assert!(!sql.contains("DROP TABLE"));
        assert!(!sql.contains("987654"));
        assert!(!sql.contains("123456"));
        assert!(!sql.contains("654321"));
        assert!(!sql.contains("4.75"));
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn statement_shape_depends_on_presence_not_values() {
        let a = PropertySearch {
            city: Some("van".to_string()),
            minimum_rating: Some(1.0),
            ..Default::default()
        };
        let b = PropertySearch {
            city: Some("toronto".to_string()),
            minimum_rating: Some(4.9),
            ..Default::default()
        };
        let (sql_a, _) = build_search_query(&a, 5);
        let (sql_b, _) = build_search_query(&b, 50);
        assert_eq!(sql_a, sql_b);
    }
}
