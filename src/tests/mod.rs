mod currency_tests;
