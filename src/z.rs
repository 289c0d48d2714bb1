/// Z配列を作成する
///
/// `z[i]`は`slice`と`slice[i..]`の最長共通接頭辞の長さ.
/// `z[0]`は`slice.len()`になる.
///
/// # Time complexity
///
/// - *O*(*N*)
#[must_use]
pub fn z(slice: &[impl Eq]) -> Vec<usize> {
    let n = slice.len();
    if n == 0 {
        return Vec::new();
    }
    let mut z = vec![0; n];
    z[0] = n;
    // slice[l..r] == slice[..r - l] となる窓のうち, rが最大のもの
    let mut l = 0;
    let mut r = 0;
    for i in 1..n {
        let mut k = if i < r { z[i - l].min(r - i) } else { 0 };
        while i + k < n && slice[k] == slice[i + k] {
            k += 1;
        }
        z[i] = k;
        if r < i + k {
            l = i;
            r = i + k;
        }
    }
    z
}
