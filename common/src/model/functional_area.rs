/// Categories offered by `GET /api/functional-areas`, in display order.
pub const FUNCTIONAL_AREAS: &[&str] = &[
    "Actuarial",
    "Claims",
    "Clinical",
    "Customer Service",
    "Finance",
    "Human Resources",
    "Marketing",
    "Operations",
    "Pharmacy",
    "Sales",
    "Technology",
    "Other",
];
