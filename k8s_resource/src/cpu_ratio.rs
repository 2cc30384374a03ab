//! CPU units on top of [`uom::si::ratio`], one `cpu` being one core.
unit! {
    system: uom::si;
    quantity: uom::si::ratio;

    @cpu: prefix!(none); "cpu", "cpu", "cpus";
    @millicpu: prefix!(milli); "m", "millicpu", "millicpus";
}
