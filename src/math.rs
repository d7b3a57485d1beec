pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; zero if either side is zero.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Least common multiple of all `numbers`, `None` when there are none.
pub fn lcmm(numbers: &[u64]) -> Option<u64> {
    numbers.iter().copied().reduce(lcm)
}
