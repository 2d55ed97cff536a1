//! レイヤー横断のテスト

mod http_source_tests;
