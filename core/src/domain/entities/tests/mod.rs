mod phone_verification_tests;
