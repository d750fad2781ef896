/// 2つの文字列間のレーベンシュタイン距離を計算する
///
/// # 引数
/// * `a` - 比較する文字列
/// * `b` - 比較する文字列
///
/// # 戻り値
/// 挿入・削除・置換（すべてコスト1）による最小編集回数
///
/// # 特性
/// 文字単位（char）で比較するため、日本語などのマルチバイト文字も
/// 1文字として扱われる。計算量はO(len(a)×len(b))だが、サービス名は
/// 短い（100文字未満）ため問題にならない。
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let cols = a_chars.len() + 1;
    let rows = b_chars.len() + 1;

    // 完全なDP行列を構築（行 = bの長さ+1、列 = aの長さ+1）
    let mut matrix = vec![vec![0usize; cols]; rows];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let substitution_cost = usize::from(b_chars[i - 1] != a_chars[j - 1]);
            let deletion = matrix[i - 1][j] + 1;
            let insertion = matrix[i][j - 1] + 1;
            let substitution = matrix[i - 1][j - 1] + substitution_cost;
            matrix[i][j] = deletion.min(insertion).min(substitution);
        }
    }

    matrix[rows - 1][cols - 1]
}

/// 2つの文字列の類似度を計算する
///
/// # 引数
/// * `a` - 比較する文字列
/// * `b` - 比較する文字列
///
/// # 戻り値
/// [0.0, 1.0]の類似度。`(maxLen - 編集距離) / maxLen`で算出し、
/// 両方が空文字列の場合は1.0を返す。
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(a, b);
    (max_len - distance) as f64 / max_len as f64
}
