//! 인스턴스별 메모 테이블을 가진 피보나치 계산기.

use std::collections::HashMap;

/// u128에 들어가는 가장 큰 인덱스.
pub const MAX_INDEX: u64 = 186;

/// 계산 결과를 캐시한다. 인스턴스끼리 캐시를 공유하지 않는다.
#[derive(Debug, Default)]
pub struct CachingFibonacci {
    cache: HashMap<u64, u128>,
}

impl CachingFibonacci {
    pub fn new() -> Self {
        Self::default()
    }

    /// `fib(0) = 0`, `fib(1) = 1`. u128 범위를 넘으면 `None`.
    pub fn get(&mut self, n: u64) -> Option<u128> {
        if n <= 1 {
            return Some(u128::from(n));
        }
        if n > MAX_INDEX {
            return None;
        }
        if let Some(&cached) = self.cache.get(&n) {
            return Some(cached);
        }

        // 재귀 대신 가장 가까운 캐시 지점부터 위로 채운다.
        let (mut k, mut prev, mut cur) = self.resume_point(n);
        while k < n {
            let next = prev.checked_add(cur)?;
            prev = cur;
            cur = next;
            k += 1;
            self.cache.insert(k, cur);
        }
        Some(cur)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    // (k, fib(k-1), fib(k)) 중 k가 n 이하로 가장 큰 지점.
    fn resume_point(&self, n: u64) -> (u64, u128, u128) {
        let mut k = n;
        while k >= 2 {
            if let (Some(&cur), Some(&prev)) = (self.cache.get(&k), self.lookup(k - 1)) {
                return (k, prev, cur);
            }
            k -= 1;
        }
        (1, 0, 1)
    }

    fn lookup(&self, k: u64) -> Option<&u128> {
        match k {
            0 => Some(&0),
            1 => Some(&1),
            _ => self.cache.get(&k),
        }
    }
}
