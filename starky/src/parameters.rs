use stark_field::Field;
use stark_fri::FriParameters;
use stark_util::next_power_of_two;

/// `(F, omega_FRI, omega_trace)`: the inner FRI parameters plus the trace subgroup generator
/// ("omicron" in the original vocabulary) whose order is the next power of two at or above the
/// trace height.
#[derive(Clone, Debug)]
pub struct StarkParameters<F: Field> {
    pub fri: FriParameters<F>,
    pub omicron: F,
    pub trace_height: usize,
}

impl<F: Field> StarkParameters<F> {
    pub fn new(fri: FriParameters<F>, n_rows: usize) -> Self {
        let trace_height = next_power_of_two(n_rows);
        let omicron = F::primitive_root_of_unity(trace_height);
        Self { fri, omicron, trace_height }
    }
}
