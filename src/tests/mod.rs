use fixture::Fixture;


mod touch;
