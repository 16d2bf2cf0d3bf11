pub mod search_query_tests;
