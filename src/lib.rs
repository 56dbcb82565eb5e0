//! 소스 한 줄을 YAML 파라미터 구성과 대조해 설명 텍스트를 만드는 핵심 로직.
//! CLI 뿐 아니라 추후 팝업 셸 확장도 쉽게 하도록 라이브러리로 분리한다.

pub mod app;
pub mod config_store;
pub mod i18n;
pub mod report;
pub mod resolver;
pub mod settings;
