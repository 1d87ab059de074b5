use rand::{Rng, distr::Alphanumeric};

/// 生成指定长度的随机字母数字串
pub fn generate_random_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_code_length() {
        assert_eq!(generate_random_code(16).len(), 16);
        assert_eq!(generate_random_code(0).len(), 0);
    }

    #[test]
    fn test_generate_random_code_alphanumeric() {
        let code = generate_random_code(64);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
