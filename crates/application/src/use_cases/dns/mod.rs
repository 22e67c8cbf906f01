mod lookup_domain;

pub use lookup_domain::LookupDomainUseCase;
