// Decimal shifts: multiply or divide by powers of ten

use num_traits::Zero;

use super::{BigInteger, CLUSTER_DIGITS, POW10};

impl BigInteger {
    /// Multiply by `10^places`.
    ///
    /// Whole clusters are displaced by `places / 18`; the remaining
    /// `places % 18` digits move through each cluster, with the digits pushed
    /// off the top carried into the next cluster.
    pub fn shift_left(&self, places: usize) -> Self {
        if places == 0 || self.is_zero() {
            return self.clone();
        }

        let whole = places / CLUSTER_DIGITS;
        let partial = places % CLUSTER_DIGITS;

        let mut clusters = Vec::with_capacity(whole + self.clusters.len() + 1);
        clusters.resize(whole, 0);

        if partial == 0 {
            clusters.extend_from_slice(&self.clusters);
        } else {
            let factor = POW10[partial];
            let keep = POW10[CLUSTER_DIGITS - partial];
            let mut carry = 0u64;
            for &cluster in &self.clusters {
                clusters.push((cluster % keep) * factor + carry);
                carry = cluster / keep;
            }
            clusters.push(carry);
        }

        Self::from_clusters(self.negative, clusters)
    }

    /// Divide by `10^places`, truncating toward zero.
    ///
    /// Each cluster hands the digits it loses down to the next lower cluster.
    pub fn shift_right(&self, places: usize) -> Self {
        if places == 0 || self.is_zero() {
            return self.clone();
        }
        if places >= self.digits {
            return Self::zero();
        }

        let kept = &self.clusters[places / CLUSTER_DIGITS..];
        let partial = places % CLUSTER_DIGITS;
        if partial == 0 {
            return Self::from_clusters(self.negative, kept.to_vec());
        }

        let divisor = POW10[partial];
        let lift = POW10[CLUSTER_DIGITS - partial];
        let mut clusters = vec![0u64; kept.len()];
        let mut carry = 0u64;
        for (slot, &cluster) in clusters.iter_mut().zip(kept).rev() {
            *slot = cluster / divisor + carry * lift;
            carry = cluster % divisor;
        }

        Self::from_clusters(self.negative, clusters)
    }
}
