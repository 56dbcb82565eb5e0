use crate::config_store::{ConfigStore, ValueCode};

/// 한 줄의 해석 결과. 못 찾은 필드는 None으로 남는다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub address: Option<String>,
    pub parameter: Option<String>,
    pub value: Option<i64>,
}

/// 소스 한 줄을 토큰으로 쪼개 저장 순서 기준 최선 일치를 찾는다.
/// 파서가 아니라 휴리스틱 스캔이다: 모호한 줄은 항상 저장 순서상
/// 먼저 오는 후보로 해석되고, 값은 마지막 숫자 토큰이 이긴다.
pub fn resolve(line: &str, store: &ConfigStore) -> Resolution {
    let normalized = line.replace([':', ','], " ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let mut address: Option<&str> = None;
    for addr in store.addresses() {
        if tokens.contains(&addr) {
            address = Some(addr);
            break;
        }
    }

    let mut parameter: Option<String> = None;
    if let Some(addr) = address {
        if let Some(params) = store.get(addr) {
            parameter = params
                .keys()
                .find(|name| tokens.contains(&name.as_str()))
                .cloned();
        }
    } else {
        'scan: for (_, params) in store.iter() {
            for name in params.keys() {
                if tokens.contains(&name.as_str()) {
                    parameter = Some(name.clone());
                    break 'scan;
                }
            }
        }
    }

    let mut value: Option<i64> = None;
    if let (Some(addr), Some(param)) = (address, parameter.as_deref()) {
        if let Some(spec) = store.get(addr).and_then(|params| params.get(param)) {
            // 뒤에서부터: 줄 끝에 가까운 값 토큰이 우선한다.
            for token in tokens.iter().rev() {
                if !token.bytes().all(|b| b.is_ascii_digit()) {
                    continue;
                }
                if let Ok(n) = token.parse::<i64>() {
                    if spec.possible_values.contains_key(&ValueCode::Int(n)) {
                        value = Some(n);
                        break;
                    }
                }
            }
        }
    }

    Resolution {
        address: address.map(str::to_string),
        parameter,
        value,
    }
}
