mod test_client;
