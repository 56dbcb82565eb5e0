use crate::config_store::{ConfigStore, ParameterSpec, ValueCode};
use crate::i18n::{keys, Translator};
use crate::resolver::Resolution;

/// 해석 결과를 사람이 읽을 보고 텍스트로 조립한다.
/// 모든 라벨 문자열은 번역기에서 가져오므로 줄을 다시 해석하지 않고도
/// 언어를 바꿀 수 있다.
pub fn build(result: &Resolution, store: &ConfigStore, tr: &Translator) -> String {
    let mut text = String::new();

    match (result.address.as_deref(), result.parameter.as_deref()) {
        (None, None) => {
            text.push_str(&tr.t(keys::REPORT_NO_OBJECT));
            text.push_str("\n\n");
            text.push_str(&tr.t(keys::REPORT_AVAILABLE_OBJECTS));
            text.push('\n');
            for address in store.addresses() {
                text.push_str(&format!("• {address}\n"));
            }
        }
        (None, Some(parameter)) => {
            text.push_str(&format!(
                "{} {parameter}\n",
                tr.t(keys::REPORT_PARAMETER_LABEL)
            ));
            text.push_str(&tr.t(keys::REPORT_FOUND_IN));
            text.push('\n');
            let mut found = false;
            for (address, params) in store.iter() {
                if let Some(spec) = params.get(parameter) {
                    text.push_str(&format!("• {address} (ID: {})\n", render_id(spec)));
                    found = true;
                }
            }
            if !found {
                text.push_str(&tr.t(keys::REPORT_PARAMETER_NOT_FOUND));
                text.push('\n');
            }
        }
        (Some(address), Some(parameter)) => {
            let Some(group) = store.get(address) else {
                text.push_str(&tr.t(keys::REPORT_OBJECT_NOT_EXIST));
                text.push('\n');
                return text;
            };
            let Some(spec) = group.get(parameter) else {
                text.push_str(&tr.t(keys::REPORT_PARAM_NOT_EXIST));
                text.push('\n');
                return text;
            };

            text.push_str(&format!("{} {address}\n", tr.t(keys::REPORT_OBJECT_LABEL)));
            text.push_str(&format!("{} {parameter}\n", tr.t(keys::REPORT_PARAMETER)));
            text.push_str(&format!(
                "{} {}\n\n",
                tr.t(keys::REPORT_ID_LABEL),
                render_id(spec)
            ));

            if let Some(value) = result.value {
                let description = spec
                    .possible_values
                    .get(&ValueCode::Int(value))
                    .cloned()
                    .unwrap_or_else(|| tr.t(keys::REPORT_UNKNOWN_VALUE));
                text.push_str(&tr.t(keys::REPORT_VALUE_LABEL));
                text.push('\n');
                text.push_str(&format!("    • {value} → {description}\n\n"));
            }

            text.push_str(&tr.t(keys::REPORT_POSSIBLE_VALUES));
            text.push('\n');
            for (code, description) in &spec.possible_values {
                text.push_str(&format!("    • {code} – {description}\n"));
            }
        }
        (Some(address), None) => {
            let Some(group) = store.get(address) else {
                text.push_str(&tr.t(keys::REPORT_OBJECT_NOT_EXIST));
                text.push('\n');
                return text;
            };
            text.push_str(&format!(
                "{} {address}:\n",
                tr.t(keys::REPORT_OBJECT_ONLY_LABEL)
            ));
            for (name, spec) in group {
                text.push_str(&format!("• {name} (ID: {})\n", render_id(spec)));
            }
        }
    }

    text
}

fn render_id(spec: &ParameterSpec) -> String {
    match &spec.id {
        Some(id) => id.to_string(),
        None => "-".to_string(),
    }
}
